use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use refswitch::checkout::{
    CHECKOUT_FAILED_MESSAGE, CheckoutError, CheckoutOutcome, CheckoutRequest, run_checkout,
};

#[test]
fn successful_checkout_synchronizes_before_resolving() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    let checkout_calls = calls.clone();
    let sync_calls = calls.clone();
    let outcome = block_on(run_checkout(
        CheckoutRequest::new("feature/login"),
        move |request| async move {
            checkout_calls
                .borrow_mut()
                .push(format!("checkout {}", request.name()));
            Ok(())
        },
        move || async move {
            sync_calls.borrow_mut().push("synchronize".to_string());
            Ok::<_, CheckoutError>("snapshot")
        },
    ));

    assert_eq!(
        outcome,
        CheckoutOutcome::Completed {
            synchronized: Some("snapshot"),
        }
    );
    assert_eq!(
        *calls.borrow(),
        vec!["checkout feature/login".to_string(), "synchronize".to_string()],
        "synchronization must run after the checkout and before the outcome resolves"
    );
}

#[test]
fn failed_checkout_uses_error_message_for_console_only() {
    let sync_called = Rc::new(RefCell::new(false));

    let sync_flag = sync_called.clone();
    let outcome = block_on(run_checkout(
        CheckoutRequest::new("nope"),
        |_| async { Err(CheckoutError::new("conflict: local changes would be overwritten")) },
        move || async move {
            *sync_flag.borrow_mut() = true;
            Ok::<_, CheckoutError>(())
        },
    ));

    assert_eq!(
        outcome,
        CheckoutOutcome::Failed {
            console_message: "conflict: local changes would be overwritten".to_string(),
            notification_message: CHECKOUT_FAILED_MESSAGE.to_string(),
        }
    );
    assert!(
        !*sync_called.borrow(),
        "a rejected checkout must never trigger synchronization"
    );
}

#[test]
fn failed_checkout_without_message_falls_back_everywhere() {
    let outcome: CheckoutOutcome<()> = block_on(run_checkout(
        CheckoutRequest::new("nope"),
        |_| async { Err(CheckoutError::unspecified()) },
        || async { Ok::<_, CheckoutError>(()) },
    ));

    assert_eq!(
        outcome,
        CheckoutOutcome::Failed {
            console_message: CHECKOUT_FAILED_MESSAGE.to_string(),
            notification_message: CHECKOUT_FAILED_MESSAGE.to_string(),
        }
    );
}

#[test]
fn synchronization_failure_still_completes() {
    let outcome: CheckoutOutcome<&str> = block_on(run_checkout(
        CheckoutRequest::new("main"),
        |_| async { Ok(()) },
        || async { Err::<&str, _>(CheckoutError::new("refresh failed")) },
    ));

    assert_eq!(outcome, CheckoutOutcome::Completed { synchronized: None });
}

#[test]
fn checkout_receives_the_submitted_request() {
    let seen = Rc::new(RefCell::new(None));

    let seen_request = seen.clone();
    let _ = block_on(run_checkout(
        CheckoutRequest::new("v2.1.0"),
        move |request| async move {
            *seen_request.borrow_mut() = Some(request);
            Ok(())
        },
        || async { Ok::<_, CheckoutError>(()) },
    ));

    assert_eq!(*seen.borrow(), Some(CheckoutRequest::new("v2.1.0")));
}

use super::*;
use gpui_component::Disableable as _;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::input::Input;
use gpui_component::menu::{DropdownMenu as _, PopupMenuItem};
use gpui_component::scroll::ScrollableElement as _;

include!("toolbar.rs");
include!("workspace.rs");
include!("console_panel.rs");
include!("checkout_dialog.rs");
include!("root.rs");

mod add_task;
mod all;
mod confirm;
mod footer;
mod form;
mod log;
mod login;
mod main;
mod signup;
mod status;
mod task_detail;
mod task_list;

use self::log::log;
use super::*;
use add_task::add_task;
use confirm::{centered_rect, confirm_delete};
use footer::footer;
use form::{feedback, form};
use login::login;
use main::main;
use signup::signup;
use status::status;
use task_detail::task_detail;
use task_list::task_list;

pub use all::all as render;

//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Session and task stores
//! - Navigation types (View, Navigator)
//! - Form editing types and input checks
//! - State error handling

mod error;
mod form;
mod navigation;
mod session;
mod tasks;

pub use error::StateError;
pub use form::{Form, LOGIN_EMAIL, LOGIN_PASSWORD, TASK_DESCRIPTION, TASK_TITLE};
pub use navigation::View;
pub use session::{LOGIN_FAILED, REGISTER_FAILED};
pub use tasks::{
    CREATE_TASK_FAILED, DELETE_TASK_FAILED, FETCH_TASKS_FAILED, FETCH_TASK_FAILED,
    UPDATE_TASK_FAILED,
};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

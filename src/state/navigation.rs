//! Navigation-related state types.
//!
//! The view stack always starts at the root of the flow matching the session:
//! `Login` while signed out, `Tasks` while signed in. Views of the other flow
//! can never be pushed on top.

use super::StateError;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    Login,
    Signup,
    Tasks,
    TaskDetail { id: String },
    AddTask,
}

impl View {
    /// Returns true if the view belongs to the signed-in flow.
    ///
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::Tasks | View::TaskDetail { .. } | View::AddTask)
    }

    /// Return the view title.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Signup => "Sign Up",
            View::Tasks => "Tasks",
            View::TaskDetail { .. } => "Task Details",
            View::AddTask => "Add Task",
        }
    }
}

/// Holds the view stack for the current flow.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<View>,
}

impl Navigator {
    /// Return a navigator rooted at the flow for the given session state.
    ///
    pub fn new(authenticated: bool) -> Self {
        Navigator {
            stack: vec![Self::root(authenticated)],
        }
    }

    fn root(authenticated: bool) -> View {
        if authenticated {
            View::Tasks
        } else {
            View::Login
        }
    }

    /// Replace the whole stack with the root of the matching flow.
    ///
    pub fn reset(&mut self, authenticated: bool) {
        self.stack = vec![Self::root(authenticated)];
    }

    /// Return the visible view.
    ///
    pub fn current(&self) -> &View {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    /// Returns true if the stack is rooted at the signed-in flow.
    ///
    pub fn is_authenticated_flow(&self) -> bool {
        self.stack[0].requires_auth()
    }

    /// Return the views on the stack, root first.
    ///
    pub fn views(&self) -> &[View] {
        &self.stack
    }

    /// Show the given view: go back to it if it is already on the stack,
    /// otherwise push it. Views of the other flow are rejected.
    ///
    pub fn navigate(&mut self, view: View) -> Result<(), StateError> {
        match (view.requires_auth(), self.is_authenticated_flow()) {
            (true, false) => return Err(StateError::NotAuthenticated),
            (false, true) => return Err(StateError::AlreadyAuthenticated),
            _ => (),
        }
        if let Some(index) = self.stack.iter().position(|v| *v == view) {
            self.stack.truncate(index + 1);
        } else {
            self.stack.push(view);
        }
        Ok(())
    }

    /// Pop the visible view and return it. The root view stays.
    ///
    pub fn pop(&mut self) -> Option<View> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_follows_session() {
        assert_eq!(*Navigator::new(false).current(), View::Login);
        assert_eq!(*Navigator::new(true).current(), View::Tasks);
    }

    #[test]
    fn navigate_within_flow() {
        let mut navigator = Navigator::new(true);
        navigator
            .navigate(View::TaskDetail {
                id: "t1".to_string(),
            })
            .unwrap();
        assert_eq!(
            *navigator.current(),
            View::TaskDetail {
                id: "t1".to_string()
            }
        );
        assert_eq!(navigator.views().len(), 2);
    }

    #[test]
    fn navigate_to_existing_view_goes_back() {
        let mut navigator = Navigator::new(false);
        navigator.navigate(View::Signup).unwrap();
        navigator.navigate(View::Login).unwrap();
        assert_eq!(*navigator.current(), View::Login);
        assert_eq!(navigator.views().len(), 1);
    }

    #[test]
    fn navigate_across_flows_is_rejected() {
        let mut navigator = Navigator::new(false);
        let result = navigator.navigate(View::Tasks);
        assert!(matches!(result, Err(StateError::NotAuthenticated)));
        assert_eq!(*navigator.current(), View::Login);

        let mut navigator = Navigator::new(true);
        let result = navigator.navigate(View::Signup);
        assert!(matches!(result, Err(StateError::AlreadyAuthenticated)));
    }

    #[test]
    fn pop_keeps_root() {
        let mut navigator = Navigator::new(true);
        navigator.navigate(View::AddTask).unwrap();
        assert_eq!(navigator.pop(), Some(View::AddTask));
        assert_eq!(navigator.pop(), None);
        assert_eq!(*navigator.current(), View::Tasks);
    }

    #[test]
    fn reset_switches_flow() {
        let mut navigator = Navigator::new(false);
        navigator.navigate(View::Signup).unwrap();
        navigator.reset(true);
        assert_eq!(*navigator.current(), View::Tasks);
        assert_eq!(navigator.views().len(), 1);
        assert!(navigator.is_authenticated_flow());
    }

    #[test]
    fn view_titles() {
        assert_eq!(View::Login.title(), "Login");
        assert_eq!(View::AddTask.title(), "Add Task");
        assert!(!View::Signup.requires_auth());
        assert!(View::TaskDetail { id: String::new() }.requires_auth());
    }
}

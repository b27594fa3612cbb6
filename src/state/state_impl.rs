use crate::api::{Task, User};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::ListState;

use super::form::{
    self, Form, LOGIN_EMAIL, LOGIN_PASSWORD, SIGNUP_CONFIRM_PASSWORD, SIGNUP_EMAIL, SIGNUP_NAME,
    SIGNUP_PASSWORD, TASK_DESCRIPTION, TASK_TITLE,
};
use super::navigation::{Navigator, View};
use super::session::SessionStore;
use super::tasks::TaskStore;
use super::StateError;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    session: SessionStore,
    tasks: TaskStore,
    navigator: Navigator,
    login_form: Form,
    signup_form: Form,
    add_task_form: Form,
    edit_task_form: Form,
    editing: bool,                       // Whether the detail screen is in edit mode
    delete_confirmation: Option<String>, // ID of task pending deletion confirmation
    form_error: Option<String>,          // Validation message for the visible form
    tasks_list_state: ListState,
    spinner_index: usize,
    show_log: bool,
    logs: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            session: SessionStore::default(),
            tasks: TaskStore::default(),
            navigator: Navigator::new(false),
            login_form: Form::login(),
            signup_form: Form::signup(),
            add_task_form: Form::task(),
            edit_task_form: Form::task(),
            editing: false,
            delete_confirmation: None,
            form_error: None,
            tasks_list_state: ListState::default(),
            spinner_index: 0,
            show_log: false,
            logs: LogBuffer::default(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return a new state. A persisted token restores the signed-in flow.
    ///
    pub fn new(
        net_sender: NetworkEventSender,
        has_access_token: bool,
        logs: LogBuffer,
        theme: Theme,
    ) -> Self {
        let mut state = State {
            net_sender: Some(net_sender),
            logs,
            theme,
            ..State::default()
        };
        if has_access_token {
            state.restore_session();
        }
        state
    }

    /// Send a network event to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => warn!("No network sender available, dropping {}", event.name()),
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the shared log buffer.
    ///
    pub fn get_logs(&self) -> &LogBuffer {
        &self.logs
    }

    /// Returns true if the log pane is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Show or hide the log pane.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Return the session store.
    ///
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Return the session store for mutation.
    ///
    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Return the task store.
    ///
    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    /// Return the task store for mutation.
    ///
    pub fn tasks_mut(&mut self) -> &mut TaskStore {
        &mut self.tasks
    }

    /// Returns true while any request is in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.session.is_loading() || self.tasks.is_loading()
    }

    /// Return the message to show for the visible screen: a validation
    /// message first, then the error of the store behind the screen.
    ///
    pub fn current_error(&self) -> Option<&str> {
        if let Some(message) = self.form_error.as_deref() {
            return Some(message);
        }
        if self.current_view().requires_auth() {
            self.tasks.error()
        } else {
            self.session.error()
        }
    }

    /// Return the visible view.
    ///
    pub fn current_view(&self) -> &View {
        self.navigator.current()
    }

    /// Return the views on the stack, root first.
    ///
    pub fn views(&self) -> &[View] {
        self.navigator.views()
    }

    /// Show the given view of the current flow.
    ///
    pub fn navigate(&mut self, view: View) -> Result<(), StateError> {
        self.navigator.navigate(view)?;
        self.form_error = None;
        self.session.clear_error();
        Ok(())
    }

    /// Leave the visible view. Coming back to the task list refreshes it.
    /// Returns the view that was left, or None at the root.
    ///
    pub fn go_back(&mut self) -> Option<View> {
        let popped = self.navigator.pop()?;
        self.form_error = None;
        match &popped {
            View::TaskDetail { .. } => {
                self.editing = false;
                self.delete_confirmation = None;
                self.tasks.clear_detail();
            }
            View::AddTask => {
                self.add_task_form.clear();
            }
            _ => {}
        }
        if *self.current_view() == View::Tasks {
            self.dispatch(NetworkEvent::FetchTasks);
        }
        Some(popped)
    }

    /// Switch to the signed-in flow.
    ///
    pub fn sign_in(&mut self, user: Option<User>) -> &mut Self {
        info!("Signed in{}", user.as_ref().map(|u| format!(" as {}", u.email)).unwrap_or_default());
        self.session.sign_in(user);
        self.enter_authenticated_flow();
        self
    }

    /// Switch to the signed-in flow from a persisted token.
    ///
    pub fn restore_session(&mut self) -> &mut Self {
        info!("Restoring session from stored token");
        self.session.restore();
        self.enter_authenticated_flow();
        self
    }

    fn enter_authenticated_flow(&mut self) {
        self.navigator.reset(true);
        self.tasks.clear();
        self.tasks_list_state.select(None);
        self.login_form.clear();
        self.signup_form.clear();
        self.form_error = None;
    }

    /// Switch to the signed-out flow, dropping all task data.
    ///
    pub fn sign_out(&mut self) -> &mut Self {
        info!("Signed out");
        self.session.sign_out();
        self.tasks.clear();
        self.tasks_list_state.select(None);
        self.navigator.reset(false);
        self.editing = false;
        self.delete_confirmation = None;
        self.form_error = None;
        self.add_task_form.clear();
        self.edit_task_form.clear();
        self
    }

    /// Return the form receiving keyboard input on the visible screen.
    ///
    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.navigator.current() {
            View::Login => Some(&mut self.login_form),
            View::Signup => Some(&mut self.signup_form),
            View::AddTask => Some(&mut self.add_task_form),
            View::TaskDetail { .. } if self.editing => Some(&mut self.edit_task_form),
            _ => None,
        }
    }

    /// Return the login form.
    ///
    pub fn login_form(&self) -> &Form {
        &self.login_form
    }

    /// Return the login form for rendering.
    ///
    pub fn login_form_mut(&mut self) -> &mut Form {
        &mut self.login_form
    }

    /// Return the signup form.
    ///
    pub fn signup_form(&self) -> &Form {
        &self.signup_form
    }

    /// Return the signup form for rendering.
    ///
    pub fn signup_form_mut(&mut self) -> &mut Form {
        &mut self.signup_form
    }

    /// Return the add task form.
    ///
    pub fn add_task_form(&self) -> &Form {
        &self.add_task_form
    }

    /// Return the add task form for rendering.
    ///
    pub fn add_task_form_mut(&mut self) -> &mut Form {
        &mut self.add_task_form
    }

    /// Return the edit form of the detail screen.
    ///
    pub fn edit_task_form(&self) -> &Form {
        &self.edit_task_form
    }

    /// Return the edit form of the detail screen for rendering.
    ///
    pub fn edit_task_form_mut(&mut self) -> &mut Form {
        &mut self.edit_task_form
    }

    /// Validate the login form and request a login.
    ///
    pub fn submit_login(&mut self) -> &mut Self {
        if self.session.is_loading() {
            return self;
        }
        let email = self.login_form.value(LOGIN_EMAIL).trim().to_string();
        let password = self.login_form.value(LOGIN_PASSWORD);
        match form::validate_login(&email, &password) {
            Ok(()) => {
                self.form_error = None;
                self.session.begin();
                self.dispatch(NetworkEvent::Login { email, password });
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
        self
    }

    /// Validate the signup form and request a registration.
    ///
    pub fn submit_signup(&mut self) -> &mut Self {
        if self.session.is_loading() {
            return self;
        }
        let name = self.signup_form.value(SIGNUP_NAME).trim().to_string();
        let email = self.signup_form.value(SIGNUP_EMAIL).trim().to_string();
        let password = self.signup_form.value(SIGNUP_PASSWORD);
        let confirm_password = self.signup_form.value(SIGNUP_CONFIRM_PASSWORD);
        match form::validate_signup(&name, &email, &password, &confirm_password) {
            Ok(()) => {
                self.form_error = None;
                self.session.begin();
                self.dispatch(NetworkEvent::Register {
                    name,
                    email,
                    password,
                });
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
        self
    }

    /// Request the current session to end.
    ///
    pub fn request_logout(&mut self) -> &mut Self {
        if !self.tasks.is_loading() {
            self.dispatch(NetworkEvent::Logout);
        }
        self
    }

    /// Request a fresh task list.
    ///
    pub fn refresh_tasks(&mut self) -> &mut Self {
        self.dispatch(NetworkEvent::FetchTasks);
        self
    }

    /// Replace the task list, keeping the selection within bounds.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks.set_tasks(tasks);
        self.clamp_selection();
        self
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks.tasks().len();
        if len == 0 {
            self.tasks_list_state.select(None);
        } else {
            let index = self.tasks_list_state.selected().unwrap_or(0).min(len - 1);
            self.tasks_list_state.select(Some(index));
        }
    }

    /// Return the list state of the task list.
    ///
    pub fn get_tasks_list_state(&mut self) -> &mut ListState {
        &mut self.tasks_list_state
    }

    /// Return the index of the selected task.
    ///
    pub fn selected_task_index(&self) -> Option<usize> {
        self.tasks_list_state.selected()
    }

    /// Return the selected task.
    ///
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks_list_state
            .selected()
            .and_then(|index| self.tasks.tasks().get(index))
    }

    /// Select the next task, wrapping around.
    ///
    pub fn next_task_index(&mut self) -> &mut Self {
        let len = self.tasks.tasks().len();
        if len > 0 {
            let next = match self.tasks_list_state.selected() {
                Some(index) if index + 1 < len => index + 1,
                _ => 0,
            };
            self.tasks_list_state.select(Some(next));
        }
        self
    }

    /// Select the previous task, wrapping around.
    ///
    pub fn previous_task_index(&mut self) -> &mut Self {
        let len = self.tasks.tasks().len();
        if len > 0 {
            let previous = match self.tasks_list_state.selected() {
                Some(index) if index > 0 => index - 1,
                _ => len - 1,
            };
            self.tasks_list_state.select(Some(previous));
        }
        self
    }

    /// Open the detail screen for the selected task and request the record.
    ///
    pub fn open_selected_task(&mut self) -> Result<(), StateError> {
        let id = match self.selected_task() {
            Some(task) => task.id.clone(),
            None => return Ok(()),
        };
        self.open_task(id)
    }

    /// Open the detail screen for the task with the given ID.
    ///
    pub fn open_task(&mut self, id: String) -> Result<(), StateError> {
        self.navigate(View::TaskDetail { id: id.clone() })?;
        if let Some(task) = self.tasks.get(&id) {
            debug!("Opening task '{}'", task.title);
        }
        self.editing = false;
        self.delete_confirmation = None;
        self.tasks.clear_detail();
        self.edit_task_form.clear();
        self.dispatch(NetworkEvent::GetTask { id });
        Ok(())
    }

    /// Open the add task screen with an empty form.
    ///
    pub fn open_add_task(&mut self) -> Result<(), StateError> {
        self.add_task_form.clear();
        self.navigate(View::AddTask)
    }

    /// Validate the add task form and request the creation.
    ///
    pub fn submit_add_task(&mut self) -> &mut Self {
        if self.tasks.is_loading() {
            return self;
        }
        let title = self.add_task_form.value(TASK_TITLE).trim().to_string();
        let description = self.add_task_form.value(TASK_DESCRIPTION);
        match form::validate_task(&title) {
            Ok(()) => {
                self.form_error = None;
                self.tasks.begin();
                self.dispatch(NetworkEvent::CreateTask { title, description });
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
        self
    }

    /// Apply a created task and leave the add task screen.
    ///
    pub fn task_created(&mut self, task: Task) -> &mut Self {
        self.tasks.insert(task);
        self.clamp_selection();
        self.add_task_form.clear();
        if *self.current_view() == View::AddTask {
            self.go_back();
        }
        self
    }

    /// Return the ID of the task shown on the detail screen.
    ///
    pub fn detail_task_id(&self) -> Option<&str> {
        match self.navigator.current() {
            View::TaskDetail { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Return the loaded record for the visible detail screen.
    ///
    pub fn get_task_detail(&self) -> Option<&Task> {
        let id = self.detail_task_id()?;
        self.tasks.detail().filter(|task| task.id == id)
    }

    /// Store a fetched task record. The edit form follows the record unless
    /// the user is editing.
    ///
    pub fn set_task_detail(&mut self, task: Task) -> &mut Self {
        if !self.editing {
            self.fill_edit_form(&task);
        }
        self.tasks.set_detail(task);
        self
    }

    fn fill_edit_form(&mut self, task: &Task) {
        self.edit_task_form.set_value(TASK_TITLE, &task.title);
        self.edit_task_form
            .set_value(TASK_DESCRIPTION, task.description_text());
    }

    /// Returns true if the detail screen is in edit mode.
    ///
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode once the record is loaded.
    ///
    pub fn start_editing(&mut self) -> &mut Self {
        if let Some(task) = self.get_task_detail().cloned() {
            self.fill_edit_form(&task);
            self.editing = true;
            self.form_error = None;
        }
        self
    }

    /// Leave edit mode and restore the loaded values.
    ///
    pub fn cancel_editing(&mut self) -> &mut Self {
        self.editing = false;
        self.form_error = None;
        if let Some(task) = self.get_task_detail().cloned() {
            self.fill_edit_form(&task);
        }
        self
    }

    /// Validate the edit form and request the update.
    ///
    pub fn submit_edit(&mut self) -> &mut Self {
        if !self.editing || self.tasks.is_loading() {
            return self;
        }
        let id = match self.detail_task_id() {
            Some(id) => id.to_string(),
            None => return self,
        };
        let title = self.edit_task_form.value(TASK_TITLE).trim().to_string();
        let description = self.edit_task_form.value(TASK_DESCRIPTION);
        match form::validate_task(&title) {
            Ok(()) => {
                self.form_error = None;
                self.tasks.begin();
                self.dispatch(NetworkEvent::UpdateTask {
                    id,
                    title,
                    description,
                });
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
        self
    }

    /// Apply an updated task and leave edit mode.
    ///
    pub fn task_updated(&mut self, task: Task) -> &mut Self {
        if let Err(e) = self.tasks.replace(task.clone()) {
            debug!("Updated task is not in the list: {}", e);
        }
        if self.detail_task_id() == Some(task.id.as_str()) {
            self.editing = false;
            self.fill_edit_form(&task);
        }
        self
    }

    /// Returns true if a delete confirmation is pending.
    ///
    pub fn has_delete_confirmation(&self) -> bool {
        self.delete_confirmation.is_some()
    }

    /// Ask for confirmation before deleting the task on the detail screen.
    /// Refused while a task request is in flight.
    ///
    pub fn request_delete(&mut self) -> &mut Self {
        if self.tasks.is_loading() {
            return self;
        }
        if let Some(id) = self.detail_task_id() {
            self.delete_confirmation = Some(id.to_string());
        }
        self
    }

    /// Drop the pending delete confirmation.
    ///
    pub fn cancel_delete(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self
    }

    /// Request deletion of the task pending confirmation.
    ///
    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.delete_confirmation.take() {
            if self.tasks.is_loading() {
                return self;
            }
            self.tasks.begin();
            self.dispatch(NetworkEvent::DeleteTask { id });
        }
        self
    }

    /// Remove a deleted task and leave its detail screen.
    ///
    pub fn task_deleted(&mut self, id: &str) -> &mut Self {
        self.tasks.remove(id);
        self.clamp_selection();
        if self.detail_task_id() == Some(id) {
            self.go_back();
        }
        self
    }
}

use crate::api::{Api, NewTask, TaskChanges};
use crate::config::Config;
use crate::state::{
    State, CREATE_TASK_FAILED, DELETE_TASK_FAILED, FETCH_TASKS_FAILED, FETCH_TASK_FAILED,
    LOGIN_FAILED, REGISTER_FAILED, UPDATE_TASK_FAILED,
};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Register {
        name: String,
        email: String,
        password: String,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
    FetchTasks,
    GetTask {
        id: String,
    },
    CreateTask {
        title: String,
        description: String,
    },
    UpdateTask {
        id: String,
        title: String,
        description: String,
    },
    DeleteTask {
        id: String,
    },
}

impl Event {
    /// Return the event name without its payload, safe for logging.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Event::Register { .. } => "Register",
            Event::Login { .. } => "Login",
            Event::Logout => "Logout",
            Event::FetchTasks => "FetchTasks",
            Event::GetTask { .. } => "GetTask",
            Event::CreateTask { .. } => "CreateTask",
            Event::UpdateTask { .. } => "UpdateTask",
            Event::DeleteTask { .. } => "DeleteTask",
        }
    }
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a mut Api,
    config: &'a mut Config,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a mut Api, config: &'a mut Config) -> Self {
        Handler { state, api, config }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{}'...", event.name());
        match event {
            Event::Register {
                name,
                email,
                password,
            } => self.register(name, email, password).await?,
            Event::Login { email, password } => self.login(email, password).await?,
            Event::Logout => self.logout().await?,
            Event::FetchTasks => self.fetch_tasks().await?,
            Event::GetTask { id } => self.get_task(id).await?,
            Event::CreateTask { title, description } => {
                self.create_task(title, description).await?
            }
            Event::UpdateTask {
                id,
                title,
                description,
            } => self.update_task(id, title, description).await?,
            Event::DeleteTask { id } => self.delete_task(id).await?,
        }
        Ok(())
    }

    /// Register a new account and sign in with the issued token.
    ///
    async fn register(&mut self, name: String, email: String, password: String) -> Result<()> {
        info!("Registering account for {}...", email);
        self.state.lock().await.session_mut().begin();
        match self.api.signup(&name, &email, &password).await {
            Ok(auth) => {
                self.start_session(auth.token);
                self.state.lock().await.sign_in(auth.user);
                self.fetch_tasks().await?;
            }
            Err(e) => {
                error!("Registration failed: {}", e);
                self.state
                    .lock()
                    .await
                    .session_mut()
                    .fail(e.user_message(REGISTER_FAILED));
            }
        }
        Ok(())
    }

    /// Log in and sign in with the issued token.
    ///
    async fn login(&mut self, email: String, password: String) -> Result<()> {
        info!("Logging in as {}...", email);
        self.state.lock().await.session_mut().begin();
        match self.api.login(&email, &password).await {
            Ok(auth) => {
                self.start_session(auth.token);
                self.state.lock().await.sign_in(auth.user);
                self.fetch_tasks().await?;
            }
            Err(e) => {
                error!("Login failed: {}", e);
                self.state
                    .lock()
                    .await
                    .session_mut()
                    .fail(e.user_message(LOGIN_FAILED));
            }
        }
        Ok(())
    }

    /// Attach the token to the client and persist it.
    ///
    fn start_session(&mut self, token: String) {
        self.api.set_access_token(Some(token.clone()));
        if let Err(e) = self.config.save_token(token) {
            warn!("Failed to persist session token: {}", e);
        }
    }

    /// Forget the token and return to the signed-out flow.
    ///
    async fn logout(&mut self) -> Result<()> {
        info!("Logging out...");
        self.api.set_access_token(None);
        if let Err(e) = self.config.clear_token() {
            warn!("Failed to remove session token: {}", e);
        }
        self.state.lock().await.sign_out();
        Ok(())
    }

    /// Update state with all tasks of the user.
    ///
    async fn fetch_tasks(&mut self) -> Result<()> {
        info!("Fetching tasks...");
        self.state.lock().await.tasks_mut().begin();
        match self.api.tasks().await {
            Ok(tasks) => {
                info!("Received {} tasks.", tasks.len());
                self.state.lock().await.set_tasks(tasks);
            }
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                self.state
                    .lock()
                    .await
                    .tasks_mut()
                    .fail(e.user_message(FETCH_TASKS_FAILED));
            }
        }
        Ok(())
    }

    /// Update state with the record for the detail screen.
    ///
    async fn get_task(&mut self, id: String) -> Result<()> {
        info!("Fetching task {}...", id);
        self.state.lock().await.tasks_mut().begin();
        match self.api.task(&id).await {
            Ok(task) => {
                self.state.lock().await.set_task_detail(task);
            }
            Err(e) => {
                error!("Failed to fetch task {}: {}", id, e);
                self.state
                    .lock()
                    .await
                    .tasks_mut()
                    .fail(e.user_message(FETCH_TASK_FAILED));
            }
        }
        Ok(())
    }

    /// Create a task and append it to the list.
    ///
    async fn create_task(&mut self, title: String, description: String) -> Result<()> {
        info!("Creating task '{}'...", title);
        self.state.lock().await.tasks_mut().begin();
        let new_task = NewTask { title, description };
        match self.api.create_task(&new_task).await {
            Ok(task) => {
                info!("Created task {}.", task.id);
                self.state.lock().await.task_created(task);
            }
            Err(e) => {
                error!("Failed to create task: {}", e);
                self.state
                    .lock()
                    .await
                    .tasks_mut()
                    .fail(e.user_message(CREATE_TASK_FAILED));
            }
        }
        Ok(())
    }

    /// Update a task, replace it in the list and reload the saved record.
    ///
    async fn update_task(&mut self, id: String, title: String, description: String) -> Result<()> {
        info!("Updating task {}...", id);
        self.state.lock().await.tasks_mut().begin();
        let changes = TaskChanges { title, description };
        match self.api.update_task(&id, &changes).await {
            Ok(task) => {
                self.state.lock().await.task_updated(task);
                self.get_task(id).await?;
            }
            Err(e) => {
                error!("Failed to update task {}: {}", id, e);
                self.state
                    .lock()
                    .await
                    .tasks_mut()
                    .fail(e.user_message(UPDATE_TASK_FAILED));
            }
        }
        Ok(())
    }

    /// Delete a task and remove it from the list.
    ///
    async fn delete_task(&mut self, id: String) -> Result<()> {
        info!("Deleting task {}...", id);
        self.state.lock().await.tasks_mut().begin();
        match self.api.delete_task(&id).await {
            Ok(()) => {
                self.state.lock().await.task_deleted(&id);
            }
            Err(e) => {
                error!("Failed to delete task {}: {}", id, e);
                self.state
                    .lock()
                    .await
                    .tasks_mut()
                    .fail(e.user_message(DELETE_TASK_FAILED));
            }
        }
        Ok(())
    }
}

//! Task API module.
//!
//! Wraps the remote REST API used by the application: account creation,
//! login and the task CRUD endpoints.

mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;

/// Responsible for asynchronous interaction with the task API including
/// transformation of response data into explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL and request timeout.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Api, ApiError> {
        debug!("Initializing task API client for {}...", base_url);
        Ok(Api {
            client: Client::new(base_url, timeout)?,
        })
    }

    /// Attach or detach the bearer token used for task requests.
    ///
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.client.access_token = token;
    }

    /// Returns true if a bearer token is attached.
    ///
    pub fn has_access_token(&self) -> bool {
        self.client.access_token.is_some()
    }

    /// Register a new account and return the issued token and user.
    ///
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        debug!("Requesting signup for {}...", email);
        let body = json!({ "name": name, "email": email, "password": password });
        self.client
            .public(Method::POST, "auth/signup", Some(&body))
            .await
    }

    /// Log in with credentials and return the issued token and user.
    ///
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        debug!("Requesting login for {}...", email);
        let body = json!({ "email": email, "password": password });
        self.client
            .public(Method::POST, "auth/login", Some(&body))
            .await
    }

    /// Returns all tasks of the authenticated user.
    ///
    pub async fn tasks(&mut self) -> Result<Vec<Task>, ApiError> {
        debug!("Requesting tasks...");
        let tasks: Vec<Task> = self
            .client
            .authorized::<(), _>(Method::GET, "tasks", None)
            .await?;
        debug!("Retrieved {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Returns the task with the given ID.
    ///
    pub async fn task(&mut self, id: &str) -> Result<Task, ApiError> {
        debug!("Requesting task {}...", id);
        self.client
            .authorized::<(), _>(Method::GET, &format!("tasks/{}", id), None)
            .await
    }

    /// Create a task and return the stored record.
    ///
    pub async fn create_task(&mut self, task: &NewTask) -> Result<Task, ApiError> {
        debug!("Creating task '{}'...", task.title);
        self.client
            .authorized(Method::POST, "tasks", Some(task))
            .await
    }

    /// Update a task and return the stored record.
    ///
    pub async fn update_task(&mut self, id: &str, changes: &TaskChanges) -> Result<Task, ApiError> {
        debug!("Updating task {}...", id);
        self.client
            .authorized(Method::PUT, &format!("tasks/{}", id), Some(changes))
            .await
    }

    /// Delete a task.
    ///
    pub async fn delete_task(&mut self, id: &str) -> Result<(), ApiError> {
        debug!("Deleting task {}...", id);
        self.client
            .authorized_empty(Method::DELETE, &format!("tasks/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::prelude::*;

    fn api_for(server: &MockServer, token: Option<&str>) -> Api {
        let mut api = Api::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        api.set_access_token(token.map(str::to_owned));
        api
    }

    #[tokio::test]
    async fn login_success() -> Result<(), ApiError> {
        let token = uuid::Uuid::new_v4().to_string();
        let user: User = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/login")
                    .json_body(json!({ "email": user.email, "password": "secret" }));
                then.status(200).json_body(json!({
                    "token": token,
                    "user": { "_id": user.id, "name": user.name, "email": user.email }
                }));
            })
            .await;

        let mut api = api_for(&server, None);
        let auth = api.login(&user.email, "secret").await?;
        mock.assert_async().await;
        assert_eq!(auth.token, token);
        assert_eq!(auth.user, Some(user));
        Ok(())
    }

    #[tokio::test]
    async fn login_unauthorized_carries_server_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401)
                    .json_body(json!({ "message": "Invalid credentials" }));
            })
            .await;

        let mut api = api_for(&server, None);
        let error = api.login("a@b.c", "wrong").await.unwrap_err();
        mock.assert_async().await;
        assert!(matches!(error, ApiError::ApiError { status: 401, .. }));
        assert_eq!(
            error.user_message("Invalid email or password"),
            "Invalid credentials"
        );
    }

    #[tokio::test]
    async fn undecodable_login_response_keeps_token_out_of_logs() {
        let logs = crate::logger::tests::captured_logs();
        let token = format!("secret-{}", uuid::Uuid::new_v4());

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200)
                    .json_body(json!({ "token": token, "user": { "_id": 42 } }));
            })
            .await;

        let mut api = api_for(&server, None);
        let error = api.login("a@b.c", "secret").await.unwrap_err();
        assert!(matches!(error, ApiError::Deserialization(_)));

        let entries = logs.tail(usize::MAX);
        assert!(entries
            .iter()
            .any(|entry| entry.contains("Failed to deserialize API response")));
        assert!(entries.iter().all(|entry| !entry.contains(&token)));
    }

    #[tokio::test]
    async fn signup_success() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/signup").json_body(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "password": "secret"
                }));
                then.status(201).json_body(json!({ "token": "issued" }));
            })
            .await;

        let mut api = api_for(&server, None);
        let auth = api.signup("Ada", "ada@example.com", "secret").await?;
        mock.assert_async().await;
        assert_eq!(auth.token, "issued");
        assert!(auth.user.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn tasks_success() -> Result<(), ApiError> {
        let token = uuid::Uuid::new_v4().to_string();
        let tasks: [Task; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tasks")
                    .header("Authorization", format!("Bearer {}", token).as_str());
                then.status(200).json_body(json!([
                    { "_id": tasks[0].id, "title": tasks[0].title },
                    { "_id": tasks[1].id, "title": tasks[1].title, "status": "Done" }
                ]));
            })
            .await;

        let mut api = api_for(&server, Some(&token));
        let fetched = api.tasks().await?;
        mock.assert_async().await;
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].id, tasks[0].id);
        assert_eq!(fetched[1].status_label(), "Done");
        Ok(())
    }

    #[tokio::test]
    async fn tasks_without_token_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/tasks");
                then.status(200).json_body(json!([]));
            })
            .await;

        let mut api = api_for(&server, None);
        assert!(matches!(api.tasks().await, Err(ApiError::MissingToken)));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn task_success() -> Result<(), ApiError> {
        let task = Task {
            id: "t42".to_string(),
            ..Faker.fake()
        };

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tasks/t42")
                    .header("Authorization", "Bearer token");
                then.status(200).json_body(json!({
                    "_id": task.id,
                    "title": task.title,
                    "description": "details",
                    "createdAt": "2024-01-01T00:00:00.000Z"
                }));
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        let fetched = api.task(&task.id).await?;
        mock.assert_async().await;
        assert_eq!(fetched.title, task.title);
        assert_eq!(fetched.description_text(), "details");
        Ok(())
    }

    #[tokio::test]
    async fn task_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tasks/missing");
                then.status(404).json_body(json!({ "message": "Task not found" }));
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        let error = api.task("missing").await.unwrap_err();
        assert_eq!(error.user_message("Error fetching task"), "Task not found");
    }

    #[tokio::test]
    async fn create_task_posts_body() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/tasks")
                    .header("Authorization", "Bearer token")
                    .json_body(json!({ "title": "Buy milk", "description": "" }));
                then.status(201)
                    .json_body(json!({ "_id": "t1", "title": "Buy milk", "status": "New" }));
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        let created = api
            .create_task(&NewTask {
                title: "Buy milk".to_string(),
                description: String::new(),
            })
            .await?;
        mock.assert_async().await;
        assert_eq!(created.id, "t1");
        Ok(())
    }

    #[tokio::test]
    async fn update_task_puts_body() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/tasks/t1")
                    .header("Authorization", "Bearer token")
                    .json_body(json!({ "title": "Renamed", "description": "More" }));
                then.status(200).json_body(json!({
                    "_id": "t1",
                    "title": "Renamed",
                    "description": "More"
                }));
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        let updated = api
            .update_task(
                "t1",
                &TaskChanges {
                    title: "Renamed".to_string(),
                    description: "More".to_string(),
                },
            )
            .await?;
        mock.assert_async().await;
        assert_eq!(updated.title, "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn delete_task_ignores_body() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/tasks/t1")
                    .header("Authorization", "Bearer token");
                then.status(200).body("Task removed");
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        api.delete_task("t1").await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn server_error_without_message_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/tasks/t1");
                then.status(500).body("<html>oops</html>");
            })
            .await;

        let mut api = api_for(&server, Some("token"));
        let error = api.delete_task("t1").await.unwrap_err();
        assert_eq!(error.user_message("Error deleting task"), "Error deleting task");
    }
}

use crate::error::AppResult;
use crate::state::{Form, State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};
use tui_textarea::CursorMove;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) if key.kind == KeyEventKind::Press => Ok(handle_key(state, key)?),
            Event::Input(_) => Ok(true),
            Event::Tick => {
                if state.is_loading() {
                    state.advance_spinner_index();
                }
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> AppResult<bool> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.toggle_log();
            return Ok(true);
        }
        _ => (),
    }

    if state.has_delete_confirmation() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                state.confirm_delete();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                state.cancel_delete();
            }
            _ => (),
        }
        return Ok(true);
    }

    match state.current_view().clone() {
        View::Login | View::Signup => handle_auth_form(state, key)?,
        View::Tasks => return handle_task_list(state, key),
        View::TaskDetail { .. } if state.is_editing() => handle_edit_form(state, key),
        View::TaskDetail { .. } => handle_task_detail(state, key),
        View::AddTask => handle_add_form(state, key),
    }
    Ok(true)
}

/// Returns true if the key carries no modifier beyond shift.
///
fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Apply text editing keys to a form. Returns true if the key was consumed.
///
fn edit_text(form: &mut Form, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if is_plain(key) => {
            form.insert_char(c);
        }
        KeyCode::Backspace => {
            form.backspace();
        }
        KeyCode::Delete => {
            form.delete();
        }
        KeyCode::Left => {
            form.move_cursor(CursorMove::Back);
        }
        KeyCode::Right => {
            form.move_cursor(CursorMove::Forward);
        }
        KeyCode::Home => {
            form.move_cursor(CursorMove::Head);
        }
        KeyCode::End => {
            form.move_cursor(CursorMove::End);
        }
        KeyCode::Tab => {
            form.focus_next();
        }
        KeyCode::BackTab => {
            form.focus_previous();
        }
        _ => return false,
    }
    true
}

/// Handle keys on the login and signup screens.
///
fn handle_auth_form(state: &mut State, key: KeyEvent) -> AppResult<()> {
    let on_signup = *state.current_view() == View::Signup;
    match key {
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            let submit = state
                .active_form_mut()
                .map(|form| {
                    if form.is_last_focused() {
                        true
                    } else {
                        form.focus_next();
                        false
                    }
                })
                .unwrap_or(false);
            if submit && on_signup {
                state.submit_signup();
            } else if submit {
                state.submit_login();
            }
        }
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            if on_signup {
                state.go_back();
            } else {
                state.navigate(View::Signup)?;
            }
        }
        KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            if let Some(form) = state.active_form_mut() {
                form.toggle_secrets();
            }
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } if on_signup => {
            state.go_back();
        }
        KeyEvent {
            code: KeyCode::Down,
            ..
        } => {
            if let Some(form) = state.active_form_mut() {
                form.focus_next();
            }
        }
        KeyEvent { code: KeyCode::Up, .. } => {
            if let Some(form) = state.active_form_mut() {
                form.focus_previous();
            }
        }
        _ => {
            if let Some(form) = state.active_form_mut() {
                edit_text(form, &key);
            }
        }
    }
    Ok(())
}

/// Handle keys on the task list. Returns false if exit was requested.
///
fn handle_task_list(state: &mut State, key: KeyEvent) -> AppResult<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(false),
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_task_index();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_task_index();
        }
        KeyCode::Enter => state.open_selected_task()?,
        KeyCode::Char('a') => state.open_add_task()?,
        KeyCode::Char('r') => {
            state.refresh_tasks();
        }
        KeyCode::Char('L') => {
            state.request_logout();
        }
        _ => (),
    }
    Ok(true)
}

/// Handle keys on the task detail screen outside edit mode.
///
fn handle_task_detail(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            state.go_back();
        }
        KeyCode::Char('e') => {
            state.start_editing();
        }
        KeyCode::Char('d') => {
            state.request_delete();
        }
        _ => (),
    }
}

/// Handle keys on the task detail screen in edit mode.
///
fn handle_edit_form(state: &mut State, key: KeyEvent) {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.submit_edit();
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            state.cancel_editing();
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            let form = state.edit_task_form_mut();
            if !form.insert_newline() {
                form.focus_next();
            }
        }
        _ => {
            edit_text(state.edit_task_form_mut(), &key);
        }
    }
}

/// Handle keys on the add task screen.
///
fn handle_add_form(state: &mut State, key: KeyEvent) {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.submit_add_task();
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            state.go_back();
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            if !state.add_task_form_mut().insert_newline() {
                state.submit_add_task();
            }
        }
        _ => {
            edit_text(state.add_task_form_mut(), &key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Task;
    use crate::events::network::Event as NetworkEvent;
    use crate::logger::LogBuffer;
    use crate::state::{LOGIN_EMAIL, LOGIN_PASSWORD, TASK_DESCRIPTION, TASK_TITLE};
    use crate::ui::Theme;
    use fake::{Fake, Faker};
    use std::sync::mpsc::Receiver;

    fn connected_state(authenticated: bool) -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, authenticated, LogBuffer::default(), Theme::default());
        (state, rx)
    }

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn ctrl(state: &mut State, c: char) -> bool {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap()
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            ..Faker.fake()
        }
    }

    #[test]
    fn ctrl_c_exits_everywhere() {
        let (mut state, _rx) = connected_state(false);
        assert!(!ctrl(&mut state, 'c'));
        let (mut state, _rx) = connected_state(true);
        assert!(!ctrl(&mut state, 'c'));
    }

    #[test]
    fn q_types_on_login_but_quits_task_list() {
        let (mut state, _rx) = connected_state(false);
        assert!(press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.login_form().value(LOGIN_EMAIL), "q");

        let (mut state, _rx) = connected_state(true);
        assert!(!press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn login_form_submits_on_enter() {
        let (mut state, rx) = connected_state(false);
        type_text(&mut state, "ada@example.com");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "secret");
        assert_eq!(state.login_form().value(LOGIN_PASSWORD), "secret");
        press(&mut state, KeyCode::Enter);
        assert!(matches!(rx.try_recv().unwrap(), NetworkEvent::Login { .. }));
    }

    #[test]
    fn ctrl_s_switches_between_login_and_signup() {
        let (mut state, _rx) = connected_state(false);
        ctrl(&mut state, 's');
        assert_eq!(*state.current_view(), View::Signup);
        ctrl(&mut state, 's');
        assert_eq!(*state.current_view(), View::Login);
        ctrl(&mut state, 's');
        press(&mut state, KeyCode::Esc);
        assert_eq!(*state.current_view(), View::Login);
    }

    #[test]
    fn ctrl_t_reveals_passwords() {
        let (mut state, _rx) = connected_state(false);
        ctrl(&mut state, 't');
        assert!(state.login_form().secrets_visible());
    }

    #[test]
    fn ctrl_l_toggles_log() {
        let (mut state, _rx) = connected_state(true);
        ctrl(&mut state, 'l');
        assert!(state.is_log_visible());
    }

    #[test]
    fn task_list_keys() {
        let (mut state, rx) = connected_state(true);
        state.set_tasks(vec![task("a"), task("b")]);
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.selected_task_index(), Some(1));
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(rx.try_recv().unwrap(), NetworkEvent::FetchTasks);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.detail_task_id(), Some("b"));
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::GetTask { id: "b".to_string() }
        );
    }

    #[test]
    fn shift_l_logs_out() {
        let (mut state, rx) = connected_state(true);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
        )
        .unwrap();
        assert_eq!(rx.try_recv().unwrap(), NetworkEvent::Logout);
    }

    #[test]
    fn add_task_flow() {
        let (mut state, rx) = connected_state(true);
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(*state.current_view(), View::AddTask);
        type_text(&mut state, "Buy milk");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "line one");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "line two");
        assert_eq!(state.add_task_form().value(TASK_TITLE), "Buy milk");
        assert_eq!(
            state.add_task_form().value(TASK_DESCRIPTION),
            "line one\nline two"
        );
        ctrl(&mut state, 's');
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::CreateTask {
                title: "Buy milk".to_string(),
                description: "line one\nline two".to_string()
            }
        );
    }

    #[test]
    fn escape_leaves_add_task() {
        let (mut state, _rx) = connected_state(true);
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(*state.current_view(), View::Tasks);
    }

    #[test]
    fn detail_edit_and_delete_keys() {
        let (mut state, rx) = connected_state(true);
        state.open_task("a".to_string()).unwrap();
        let _ = rx.try_recv();
        state.set_task_detail(task("a"));

        press(&mut state, KeyCode::Char('e'));
        assert!(state.is_editing());
        press(&mut state, KeyCode::Char('d'));
        assert!(!state.has_delete_confirmation());
        press(&mut state, KeyCode::Esc);
        assert!(!state.is_editing());

        press(&mut state, KeyCode::Char('d'));
        assert!(state.has_delete_confirmation());
        press(&mut state, KeyCode::Char('n'));
        assert!(!state.has_delete_confirmation());
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('y'));
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::DeleteTask { id: "a".to_string() }
        );
    }

    #[test]
    fn escape_leaves_detail() {
        let (mut state, rx) = connected_state(true);
        state.open_task("a".to_string()).unwrap();
        let _ = rx.try_recv();
        press(&mut state, KeyCode::Esc);
        assert_eq!(*state.current_view(), View::Tasks);
        assert_eq!(rx.try_recv().unwrap(), NetworkEvent::FetchTasks);
    }
}

use crate::chat::{ChatService, StubChatService};
use crate::config::ConfigStore;
use crate::content::Content;
use crate::shutdown::ShutdownHandle;
use crate::typewriter::{Animator, Render, RenderSink, TokioScheduler};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 16;

/// Run the TUI until the user quits or shutdown is signaled.
pub fn run(
    config: ConfigStore,
    content: Arc<Content>,
    runtime: Handle,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let settings = config.get();
    let tick_rate = settings.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, Arc::clone(&content));
    let events = EventHandler::new(tick_rate, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let render_tx = events.sender();
    let sink: RenderSink = Arc::new(move |render: &Render| {
        let _ = render_tx.send(AppEvent::Typewriter(render.clone()));
    });
    let scheduler = Arc::new(TokioScheduler::new(runtime.clone()));
    let animator = Animator::create_with(
        settings.typewriter.phrases_or(&content.focus),
        scheduler,
        settings.typewriter.timing(),
        Some(sink),
    )
    .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    app.on_typewriter(animator.current_render());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.set_command_sender(command_tx);
    runtime.spawn(chat_worker(
        StubChatService::new(),
        command_rx,
        events.sender(),
        shutdown.clone(),
    ));

    tracing::info!(
        tick_rate_ms = tick_rate.as_millis() as u64,
        theme = %app.theme(),
        "ui started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Typewriter(render)) => app.on_typewriter(render),
            Ok(AppEvent::ChatReply(reply)) => app.on_chat_reply(reply),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    animator.dispose();
    shutdown.signal();
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}

/// Answer chat commands one at a time until the queue closes or shutdown.
pub async fn chat_worker<S: ChatService>(
    service: S,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let command = tokio::select! {
            command = commands.recv() => command,
            _ = shutdown.wait() => None,
        };
        let Some(command) = command else {
            break;
        };
        match command {
            UiCommand::GenerateReply { message, history } => {
                tracing::debug!(chars = message.chars().count(), "generating chat reply");
                let reply = service.generate(&message, &history).await;
                if events.send(AppEvent::ChatReply(reply)).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("chat worker stopped");
}

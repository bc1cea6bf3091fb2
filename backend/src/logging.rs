use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,promo_backend=info";

/// Targets of the HTTP client and server internals; their connection chatter
/// never reaches the console.
const TRANSPORT_TARGETS: [&str; 3] = ["hyper", "reqwest", "h2"];

/// Collects the event message plus any structured fields as `key=value`.
#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
}

impl EventText {
    fn push_field(&mut self, field: &Field, value: std::fmt::Arguments<'_>) {
        if field.name() == "message" {
            let _ = self.message.write_fmt(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn render(self) -> String {
        format!("{}{}", self.message, self.fields)
    }
}

impl Visit for EventText {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push_field(field, format_args!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push_field(field, format_args!("{}", value));
    }
}

fn is_transport_noise(target: &str) -> bool {
    TRANSPORT_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

/// Console line for one event, or `None` when it should stay quiet. Debug
/// output is limited to the mailing-list services.
fn console_line(level: &Level, target: &str, text: &str, timestamp: &str) -> Option<String> {
    if text.is_empty() || is_transport_noise(target) {
        return None;
    }
    let marker = match level.as_str() {
        "ERROR" => "❌ Error: ",
        "WARN" => "⚠️ Warning: ",
        "INFO" => "ℹ️ ",
        "DEBUG" if target.contains("services") => "🔄 ",
        _ => return None,
    };
    Some(format!("[{}] {}{} - {}", timestamp, marker, target, text))
}

struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_transport_noise(metadata.target()) {
            return;
        }

        let mut text = EventText::default();
        event.record(&mut text);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        if let Some(line) = console_line(metadata.level(), metadata.target(), &text.render(), &timestamp) {
            println!("{}", line);
        }
    }
}

pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(ConsoleLayer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const TS: &str = "2024-05-01 12:00:00.000";

    #[test]
    fn test_console_line_by_level() {
        assert_eq!(
            console_line(&Level::ERROR, "promo_backend::handlers", "Error in register-user: boom", TS).as_deref(),
            Some("[2024-05-01 12:00:00.000] ❌ Error: promo_backend::handlers - Error in register-user: boom")
        );
        assert!(console_line(&Level::WARN, "promo_backend", "slow", TS).unwrap().contains("⚠️ Warning"));
        assert!(console_line(&Level::DEBUG, "promo_backend::services::brevo", "posting", TS).is_some());
        assert!(console_line(&Level::DEBUG, "promo_backend::handlers", "posting", TS).is_none());
        assert!(console_line(&Level::TRACE, "promo_backend::services", "posting", TS).is_none());
        assert!(console_line(&Level::INFO, "promo_backend", "", TS).is_none());
    }

    #[test]
    fn test_http_stack_is_silenced() {
        assert!(console_line(&Level::ERROR, "hyper::proto::h1", "connection reset", TS).is_none());
        assert!(console_line(&Level::INFO, "reqwest::connect", "starting", TS).is_none());
        assert!(console_line(&Level::INFO, "promo_backend::services::mailchimp", "ok", TS).is_some());
    }

    struct CaptureLayer(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut text = EventText::default();
            event.record(&mut text);
            self.0.lock().unwrap().push(text.render());
        }
    }

    #[test]
    fn test_event_text_keeps_structured_fields() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let subscriber = Registry::default().with(CaptureLayer(lines.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(email = "ana@example.com", status = 400, "Provider rejected contact");
            tracing::info!("Registering wheel contact: {}", "ana@example.com");
        });

        let lines = lines.lock().unwrap();
        assert_eq!(lines[0], "Provider rejected contact email=ana@example.com status=400");
        assert_eq!(lines[1], "Registering wheel contact: ana@example.com");
    }
}

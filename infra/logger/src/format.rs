use chrono::Local;
use std::fmt;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Local time with millisecond precision, e.g. `2024-05-01 13:37:00,042`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Renders one event per line as `[<timestamp>: <LEVEL>: <module>: <message> <fields>]`.
///
/// `<module>` is the last segment of the emitting module path, so an event from
/// `cnn_common::yaml` is tagged `yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}: {}: {}: ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.level(),
            module_name(meta)
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

fn module_name(meta: &'static Metadata<'static>) -> &'static str {
    let path = meta.module_path().unwrap_or_else(|| meta.target());
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::layer;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = SharedBuf(Arc::clone(&buf));
        let bracket = layer()
            .event_format(BracketFormat)
            .with_ansi(false)
            .with_writer(move || writer.clone());
        let subscriber = tracing_subscriber::registry().with(bracket);

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn renders_bracketed_line_with_module_and_fields() {
        let out = capture(|| tracing::info!(path = %"config/config.yaml", "Loaded YAML file"));

        assert!(out.starts_with('['), "line should open with a bracket: {out}");
        assert!(out.ends_with("]\n"), "line should close with a bracket: {out}");
        assert!(
            out.contains(": INFO: tests: Loaded YAML file path=config/config.yaml]"),
            "unexpected layout: {out}"
        );
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        let out = capture(|| tracing::warn!("disk almost full"));

        let stamp = out.trim_start_matches('[').split(": ").next().unwrap();
        assert_eq!(stamp.len(), "2024-05-01 13:37:00,042".len(), "bad timestamp: {stamp}");
        assert_eq!(stamp.as_bytes()[19], b',');
        assert!(out.contains(": WARN: tests: disk almost full]"));
    }
}

// ============================================================
// SHELL BOUNDARY
// ============================================================
// The two narrow interfaces the presentation shell plugs into

use std::path::PathBuf;

use crate::application::OverlapReport;
use crate::domain::error::Result;
use crate::domain::Overlap;

/// Supplies the roster path, e.g. a document picker.
///
/// `None` means the user picked nothing and the run is a no-op.
pub trait RosterSource {
    fn roster_path(&self) -> Option<PathBuf>;
}

/// Consumes the computed outcome, e.g. a result label.
pub trait OverlapSink {
    fn display(&mut self, outcome: Option<Overlap>);
}

/// Run the pipeline for whatever the source supplies and hand the outcome
/// to the sink. A read failure propagates so the shell can decide to show
/// nothing; the sink is only called for a completed run.
pub fn process_roster(source: &dyn RosterSource, sink: &mut dyn OverlapSink) -> Result<()> {
    let Some(path) = source.roster_path() else {
        return Ok(());
    };

    let outcome = OverlapReport::new().run(&path)?;
    sink.display(outcome);
    Ok(())
}

/// Plain-text sink rendering the outcome the way the original label does
#[derive(Debug, Default)]
pub struct PlainTextSink {
    rendered: Option<String>,
}

impl PlainTextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered line, if a run has completed
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

impl OverlapSink for PlainTextSink {
    fn display(&mut self, outcome: Option<Overlap>) {
        self.rendered = Some(match outcome {
            Some(overlap) => overlap.to_string(),
            None => "no overlapping assignments found".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    struct FixedSource(Option<PathBuf>);

    impl RosterSource for FixedSource {
        fn roster_path(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_displays_result_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "EmpID,ProjectID,DateFrom,DateTo\n\
             1,1,2023-01-01,2023-01-05\n\
             2,1,2023-01-02,2023-01-06\n"
        )
        .unwrap();

        let source = FixedSource(Some(file.path().to_path_buf()));
        let mut sink = PlainTextSink::new();
        process_roster(&source, &mut sink).unwrap();

        assert_eq!(sink.rendered(), Some("1, 2, 1, 3"));
    }

    #[test]
    fn test_no_selection_is_a_no_op() {
        let source = FixedSource(None);
        let mut sink = PlainTextSink::new();
        process_roster(&source, &mut sink).unwrap();

        assert_eq!(sink.rendered(), None);
    }

    #[test]
    fn test_read_failure_leaves_sink_untouched() {
        let source = FixedSource(Some(Path::new("/nonexistent/roster.csv").to_path_buf()));
        let mut sink = PlainTextSink::new();

        assert!(process_roster(&source, &mut sink).is_err());
        assert_eq!(sink.rendered(), None);
    }

    #[test]
    fn test_renders_explicit_no_overlap_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "EmpID,ProjectID,DateFrom,DateTo\n").unwrap();

        let source = FixedSource(Some(file.path().to_path_buf()));
        let mut sink = PlainTextSink::new();
        process_roster(&source, &mut sink).unwrap();

        assert_eq!(sink.rendered(), Some("no overlapping assignments found"));
    }
}

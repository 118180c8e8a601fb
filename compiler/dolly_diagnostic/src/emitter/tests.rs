use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn tally_counts_by_severity() {
    let diagnostics = [
        Diagnostic::error(ErrorCode::E1001),
        Diagnostic::warning(ErrorCode::E0003),
        Diagnostic::error(ErrorCode::E1002),
    ];

    assert_eq!(
        Tally::of(&diagnostics),
        Tally {
            errors: 2,
            warnings: 1
        }
    );
    assert_eq!(Tally::of(&[]), Tally::default());
}

#[derive(Default)]
struct Recorder {
    codes: Vec<ErrorCode>,
    finished: Option<Tally>,
}

impl DiagnosticEmitter for Recorder {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        assert!(self.finished.is_none(), "emit after finish");
        self.codes.push(diagnostic.code);
    }

    fn finish(&mut self, tally: Tally) {
        self.finished = Some(tally);
    }
}

#[test]
fn report_emits_in_order_then_finishes() {
    let mut recorder = Recorder::default();
    let tally = recorder.report(&[
        Diagnostic::error(ErrorCode::E1002),
        Diagnostic::error(ErrorCode::E1001),
    ]);

    assert_eq!(recorder.codes, vec![ErrorCode::E1002, ErrorCode::E1001]);
    assert_eq!(recorder.finished, Some(tally));
    assert_eq!(tally.errors, 2);
}

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// A single named, regex-driven text-to-text repair.
///
/// Passes are applied in a fixed order because later passes depend on the
/// output of earlier ones: the trailing-comma pass assumes empty values have
/// already been replaced with `null`, and the missing-comma pass assumes
/// stray separators are gone.
struct RepairPass {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl RepairPass {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("repair pattern must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        let repaired = self.pattern.replace_all(text, self.replacement);

        if repaired != text {
            trace!("Repair pass [{}] modified the payload", self.name);
        }

        repaired.into_owned()
    }
}

static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x1F\x7F-\u{009F}]").expect("control character pattern must compile")
});

/// Conservative repairs, safe to run on already-valid JSON.
static PRIMARY_PASSES: LazyLock<[RepairPass; 5]> = LazyLock::new(|| {
    [
        // Precondition: raw decoded text. Postcondition: no value slot
        // between an opening delimiter or colon and a closer/separator is
        // left empty. Trailing commas are a later pass's job.
        RepairPass::new("empty-value-null", r"([{\[:])\s*([,\]\}])", "${1}null${2}"),
        // Postcondition: no run of consecutive commas remains. Replacement
        // is non-overlapping, so without this pass a comma run would leave
        // a residue behind the trailing-comma pass and re-running the
        // chain would keep changing the text.
        RepairPass::new("collapse-comma-runs", r",(\s*,)+", ","),
        // Precondition: empty slots hold `null` and comma runs are
        // collapsed. Postcondition: no comma directly precedes a closer.
        RepairPass::new("trailing-comma", r",\s*([,\]\}])", "${1}"),
        // Postcondition: no whitespace between a delimiter and a closing
        // brace that immediately follows it.
        RepairPass::new("tighten-brace-close", r"([{,])\s*\}", "${1}}"),
        // Postcondition: two adjacent terminations dropped by the upstream
        // encoder are separated by a comma again.
        RepairPass::new("missing-comma", r"\}([^,\]\}])", "},${1}"),
    ]
});

/// Aggressive, lossy repairs used only after a strict parse failure. The
/// key-quoting pass can mangle valid string content containing colons, so
/// it must never run on text that already parses.
static AGGRESSIVE_PASSES: LazyLock<[RepairPass; 2]> = LazyLock::new(|| {
    [
        RepairPass::new(
            "quote-keys",
            r#"(['"])?([a-zA-Z0-9_]+)(['"])?:"#,
            "\"${2}\":",
        ),
        RepairPass::new("single-quotes", r"'", "\""),
    ]
});

/// Removes control characters (0x00-0x1F, 0x7F-0x9F) that would break the
/// JSON parser while staying invisible in the payload.
pub fn strip_control_chars(text: &str) -> String {
    CONTROL_CHARS.replace_all(text, "").into_owned()
}

/// Runs the conservative repair chain. Idempotent on its own output.
pub fn repair(text: &str) -> String {
    PRIMARY_PASSES
        .iter()
        .fold(text.to_string(), |repaired, pass| pass.apply(&repaired))
}

/// Runs the aggressive repair chain on top of already-repaired text.
pub fn repair_aggressive(text: &str) -> String {
    AGGRESSIVE_PASSES
        .iter()
        .fold(text.to_string(), |repaired, pass| pass.apply(&repaired))
}

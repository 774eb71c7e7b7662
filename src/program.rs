use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::encoder::{encode_line, AsmConfig, AsmError, Encoded};

/// An assembled instruction stream, words in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub words: Vec<u16>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn push_encoded(&mut self, enc: &Encoded) {
        self.words.extend_from_slice(enc.words());
    }
}

/// Encode every line of `src` in order. Errors are line-scoped and collected
/// so a user sees all of them in one pass; any error fails the run as a
/// whole and no program is returned.
pub fn assemble(src: &str, cfg: &AsmConfig) -> Result<Program, Vec<AsmError>> {
    let mut prog = Program::default();
    let mut errors = Vec::new();

    for (i, line) in src.lines().enumerate() {
        let line_no = i + 1;
        match encode_line(line, line_no, cfg) {
            Ok(enc) => {
                if !enc.is_empty() {
                    debug!(line = line_no, words = enc.len(), "encoded");
                }
                prog.push_encoded(&enc);
            }
            Err(err) => {
                warn!(line = line_no, %err, "encode failed");
                errors.push(err);
            }
        }
    }

    if errors.is_empty() {
        Ok(prog)
    } else {
        Err(errors)
    }
}

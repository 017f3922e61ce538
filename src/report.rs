use damm::quasigroup::QuasigroupTable;
use damm::AlphabetKind;
use serde::Serialize;

/// Result of a check, append or validate command
#[derive(Serialize, Debug, Default)]
pub struct CheckReport {
    pub alphabet: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

impl CheckReport {
    pub fn new(alphabet: AlphabetKind, input: &str) -> Self {
        Self {
            alphabet: alphabet.name().to_string(),
            input: input.to_string(),
            ..Default::default()
        }
    }
}

/// Property checks for one registered table
#[derive(Serialize, Debug)]
pub struct TableReport {
    pub order: u8,
    pub latin_square: bool,
    pub zero_diagonal: bool,
    pub totally_anti_symmetric: bool,
}

impl TableReport {
    pub fn from_table(table: &QuasigroupTable) -> Self {
        Self {
            order: table.order(),
            latin_square: table.is_latin_square(),
            zero_diagonal: table.has_zero_diagonal(),
            totally_anti_symmetric: table.is_totally_anti_symmetric(),
        }
    }

    pub fn is_sound(&self) -> bool {
        self.latin_square && self.zero_diagonal && self.totally_anti_symmetric
    }
}

impl std::fmt::Display for TableReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = |ok: bool| if ok { "ok" } else { "FAILED" };
        write!(
            f,
            "order {:>2}: latin square {}, zero diagonal {}, totally anti-symmetric {}",
            self.order,
            mark(self.latin_square),
            mark(self.zero_diagonal),
            mark(self.totally_anti_symmetric)
        )
    }
}

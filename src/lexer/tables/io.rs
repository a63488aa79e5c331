// src/lexer/tables/io.rs
use std::{
    collections::BTreeMap,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize, Serializer};
use serde_with::{DisplayFromStr, serde_as};

use super::{
    KeywordCase, KeywordSet, StateInfo, TableError, TransitionTable,
    dfa::{ALL_STATES, InputClass, N_STATES, Row, S, StateKind},
};

// -------------------- JSON (de)serialization --------------------
//
// Shape: {"states": {"q0": {"type": "start", "label": "Start"}, ...},
//         "transitions": {"q0": {"letter": "q1", "+": "q7", ...}, ...},
//         "keywords": ["auto", ...]}

#[derive(Serialize, Deserialize)]
struct StateDisk {
    #[serde(rename = "type")]
    kind: StateKind,
    label: String,
}

#[serde_as]
#[derive(Serialize, Deserialize)]
struct TableDisk {
    #[serde_as(as = "BTreeMap<DisplayFromStr, _>")]
    states: BTreeMap<S, StateDisk>,
    #[serde_as(as = "BTreeMap<DisplayFromStr, BTreeMap<DisplayFromStr, DisplayFromStr>>")]
    #[serde(default)]
    transitions: BTreeMap<S, BTreeMap<InputClass, S>>,
    #[serde(default)]
    keywords: Vec<String>,
}

impl From<&TransitionTable> for TableDisk {
    fn from(t: &TransitionTable) -> Self {
        let states = ALL_STATES
            .iter()
            .map(|&s| {
                (
                    s,
                    StateDisk {
                        kind: t.kind_of(s),
                        label: t.label_of(s).to_string(),
                    },
                )
            })
            .collect();
        let transitions = ALL_STATES
            .iter()
            .filter(|&&s| !t.row(s).is_empty())
            .map(|&s| {
                let row: BTreeMap<InputClass, S> = t.row(s).iter().map(|(&c, &to)| (c, to)).collect();
                (s, row)
            })
            .collect();
        Self {
            states,
            transitions,
            keywords: t.keywords().words().map(str::to_string).collect(),
        }
    }
}

impl TableDisk {
    fn into_table(self, case: KeywordCase) -> Result<TransitionTable, TableError> {
        let mut states: Vec<Option<StateInfo>> = vec![None; N_STATES];
        for (s, d) in self.states {
            states[s.idx()] = Some(StateInfo {
                kind: d.kind,
                label: d.label,
            });
        }
        let mut rows: Vec<Row> = vec![Row::new(); N_STATES];
        for (s, edges) in self.transitions {
            rows[s.idx()].extend(edges);
        }
        TransitionTable::from_parts(states, rows, KeywordSet::new(self.keywords, case))
    }
}

impl Serialize for TransitionTable {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        TableDisk::from(self).serialize(serializer)
    }
}

pub fn table_to_json(t: &TransitionTable) -> Result<String, TableError> {
    Ok(serde_json::to_string_pretty(&TableDisk::from(t))?)
}

pub fn save_table_json(path: &Path, t: &TransitionTable) -> Result<(), TableError> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &TableDisk::from(t))?;
    w.flush()?;
    Ok(())
}

pub fn load_table_json_bytes(data: &[u8], case: KeywordCase) -> Result<TransitionTable, TableError> {
    let disk = serde_json::from_slice::<TableDisk>(data)?;
    let table = disk.into_table(case)?;
    log::debug!(
        "loaded transition table: {} states, {} keywords",
        N_STATES,
        table.keywords().len()
    );
    Ok(table)
}

pub fn load_table_json(path: &Path, case: KeywordCase) -> Result<TransitionTable, TableError> {
    log::debug!("loading transition table from {}", path.display());
    let data = std::fs::read(path)?;
    load_table_json_bytes(&data, case)
}

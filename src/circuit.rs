//! Circuit builder demo model
//!
//! A fixed grid of qubits by columns; placing a gate replaces whatever sat in
//! that cell. Nothing here simulates the circuit.

use serde::{Deserialize, Serialize};

pub const COLUMNS: usize = 5;

/// Gates offered by the palette
pub const PALETTE: [&str; 17] = [
    "H", "X", "Y", "Z", "CNOT", "S", "T", "SWAP", "CZ", "RX", "RY", "RZ", "CH", "CCNOT", "CSWAP",
    "T†", "S†",
];

const SINGLE_CONTROL: [&str; 4] = ["CNOT", "CZ", "CH", "CSWAP"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    #[serde(rename = "type")]
    pub kind: String,
    pub qubit: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<[usize; 2]>,
}

impl Gate {
    pub fn new(kind: &str, qubit: usize, column: usize) -> Self {
        let mut gate = Self {
            kind: kind.to_string(),
            qubit,
            column,
            control: None,
            controls: None,
        };
        if SINGLE_CONTROL.contains(&kind) {
            gate.control = Some(if qubit == 0 { 1 } else { 0 });
        } else if kind == "CCNOT" {
            gate.controls = Some(match qubit {
                0 => [1, 2],
                1 => [0, 2],
                _ => [0, 1],
            });
        }
        gate
    }

    /// Symbol drawn on the target cell.
    pub fn symbol(&self) -> &str {
        match self.kind.as_str() {
            "CNOT" | "CCNOT" => "X",
            "CZ" => "Z",
            "CH" => "H",
            "CSWAP" => "SWAP",
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    pub qubits: usize,
    pub gates: Vec<Gate>,
}

impl Default for Circuit {
    fn default() -> Self {
        Self {
            qubits: 3,
            gates: vec![Gate::new("H", 0, 0), Gate::new("CNOT", 1, 1)],
        }
    }
}

impl Circuit {
    /// Place `kind` at (`qubit`, `column`), replacing any gate already there.
    /// Out-of-grid placements are ignored.
    pub fn place(&mut self, kind: &str, qubit: usize, column: usize) -> bool {
        if qubit >= self.qubits || column >= COLUMNS || !PALETTE.contains(&kind) {
            return false;
        }
        self.gates
            .retain(|g| g.column != column || g.qubit != qubit);
        self.gates.push(Gate::new(kind, qubit, column));
        true
    }

    pub fn clear_cell(&mut self, qubit: usize, column: usize) {
        self.gates
            .retain(|g| g.column != column || g.qubit != qubit);
    }

    pub fn gate_at(&self, qubit: usize, column: usize) -> Option<&Gate> {
        self.gates
            .iter()
            .find(|g| g.qubit == qubit && g.column == column)
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placing_replaces_the_cell() {
        let mut circuit = Circuit {
            qubits: 3,
            gates: vec![],
        };
        assert!(circuit.place("H", 0, 2));
        assert!(circuit.place("X", 0, 2));
        assert_eq!(circuit.gates.len(), 1);
        assert_eq!(circuit.gate_at(0, 2).unwrap().kind, "X");
    }

    #[test]
    fn controlled_gates_pick_a_neighbouring_control() {
        assert_eq!(Gate::new("CNOT", 0, 0).control, Some(1));
        assert_eq!(Gate::new("CZ", 2, 0).control, Some(0));
        assert_eq!(Gate::new("CCNOT", 0, 0).controls, Some([1, 2]));
        assert_eq!(Gate::new("CCNOT", 1, 0).controls, Some([0, 2]));
        assert_eq!(Gate::new("CCNOT", 2, 0).controls, Some([0, 1]));
        assert_eq!(Gate::new("H", 0, 0).control, None);
    }

    #[test]
    fn off_grid_and_unknown_gates_are_rejected() {
        let mut circuit = Circuit::default();
        let before = circuit.clone();
        assert!(!circuit.place("H", 3, 0));
        assert!(!circuit.place("H", 0, COLUMNS));
        assert!(!circuit.place("QFT", 0, 0));
        assert_eq!(circuit, before);
    }

    #[test]
    fn json_uses_type_key_and_omits_absent_controls() {
        let gate = Gate::new("H", 0, 0);
        let json = serde_json::to_value(&gate).unwrap();
        assert_eq!(json["type"], "H");
        assert!(json.get("control").is_none());
        assert_eq!(Gate::new("CSWAP", 1, 0).symbol(), "SWAP");
    }
}

//! Quantum frameworks the generated code can target

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Qiskit,
    Cirq,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Qiskit, Framework::Cirq];

    pub fn key(self) -> &'static str {
        match self {
            Framework::Qiskit => "qiskit",
            Framework::Cirq => "cirq",
        }
    }

    pub fn from_key(key: &str) -> Option<Framework> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Framework::Qiskit => "Qiskit",
            Framework::Cirq => "Cirq",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Framework::Qiskit => "IBM's open-source framework for quantum computing",
            Framework::Cirq => "Google's framework for NISQ algorithms",
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Framework::Qiskit => &["Industry standard", "Rich visualization", "IBM Q integration"],
            Framework::Cirq => &["Clean syntax", "Hardware-aware circuits", "Quantum noise simulation"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for framework in Framework::ALL {
            assert_eq!(Framework::from_key(framework.key()), Some(framework));
        }
        assert_eq!(Framework::from_key(""), None);
    }
}

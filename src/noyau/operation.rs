// src/noyau/operation.rs

use std::fmt;

/// Opération binaire en attente (absente = Option::None côté machine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    #[cfg(test)]
    pub const TOUTES: [Operation; 4] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Symbole affiché (écran + historique) : × et ÷ plutôt que * et /.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Accepte le clavier (+ - * /) et les glyphes d’écran (× ÷ −).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Addition),
            '-' | '−' => Some(Operation::Soustraction),
            '*' | '×' => Some(Operation::Multiplication),
            '/' | '÷' => Some(Operation::Division),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

use serde::{Deserialize, Serialize};

/// One entry of the upstream periodic-table document.
///
/// The upstream serves a single JSON object keyed by chemical symbol, with
/// the electron shells nested inside each entry:
///
/// ```json
/// {"H": {"name": "Hydrogen", "number": 1, "group": 1, "shells": [1]}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub number: u8,
    pub group: u8,
    pub shells: Vec<u8>,
}

/// Projection returned by the `element` operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ElementSummary {
    pub name: String,
    pub number: u8,
    pub group: u8,
}

/// Projection returned by the `shells` operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ElectronShells {
    pub shells: Vec<u8>,
}

impl From<Element> for ElementSummary {
    fn from(element: Element) -> Self {
        Self {
            name: element.name,
            number: element.number,
            group: element.group,
        }
    }
}

impl From<Element> for ElectronShells {
    fn from(element: Element) -> Self {
        Self {
            shells: element.shells,
        }
    }
}

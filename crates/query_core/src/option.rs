use std::fmt;
use std::str::FromStr;

/// The fixed set of backend queries offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOption {
    Indicadores,
    SalidasNoConformes,
    AccionesMejora,
    Documentos,
    Riesgos,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown query option `{0}`")]
pub struct UnknownOption(pub String);

impl QueryOption {
    /// Selector order.
    pub const ALL: [QueryOption; 5] = [
        QueryOption::Indicadores,
        QueryOption::SalidasNoConformes,
        QueryOption::AccionesMejora,
        QueryOption::Documentos,
        QueryOption::Riesgos,
    ];

    /// Path segment of the backend endpoint.
    pub fn id(self) -> &'static str {
        match self {
            QueryOption::Indicadores => "indicadores",
            QueryOption::SalidasNoConformes => "salidasNoConformes",
            QueryOption::AccionesMejora => "accionesMejora",
            QueryOption::Documentos => "documentos",
            QueryOption::Riesgos => "riesgos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryOption::Indicadores => "Indicadores",
            QueryOption::SalidasNoConformes => "Salidas No Conformes",
            QueryOption::AccionesMejora => "Acciones Mejora",
            QueryOption::Documentos => "Documentos",
            QueryOption::Riesgos => "Riesgos",
        }
    }

    /// Identifiers are matched exactly; the backend routes are case sensitive.
    pub fn from_id(id: &str) -> Result<Self, UnknownOption> {
        Self::ALL
            .into_iter()
            .find(|option| option.id() == id)
            .ok_or_else(|| UnknownOption(id.to_string()))
    }
}

impl FromStr for QueryOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

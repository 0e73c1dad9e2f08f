use std::fmt;
use std::str::FromStr;

use crate::error::MultiplyError;

/// Which backend computes the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implementation {
    CpuReference,
    CpuParallel,
    Cuda,
}

impl Implementation {
    pub const ALL: [Implementation; 3] = [
        Implementation::CpuReference,
        Implementation::CpuParallel,
        Implementation::Cuda,
    ];

    pub fn id(self) -> u32 {
        match self {
            Implementation::CpuReference => 0,
            Implementation::CpuParallel => 1,
            Implementation::Cuda => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Implementation::CpuReference => "CPU Reference",
            Implementation::CpuParallel => "CPU Parallel",
            Implementation::Cuda => "CUDA",
        }
    }

    /// Whether this build can run the backend. The CUDA kernel is only linked
    /// in with the `cuda` feature.
    pub fn is_available(self) -> bool {
        match self {
            Implementation::CpuReference | Implementation::CpuParallel => true,
            Implementation::Cuda => cfg!(feature = "cuda"),
        }
    }
}

/// Display name for a raw selector id. Unknown ids map to an empty string.
pub fn name_of_id(id: u32) -> &'static str {
    Implementation::try_from(id).map(Implementation::name).unwrap_or("")
}

impl TryFrom<u32> for Implementation {
    type Error = MultiplyError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Implementation::ALL
            .into_iter()
            .find(|implementation| implementation.id() == id)
            .ok_or(MultiplyError::UnsupportedImplementation(id))
    }
}

impl FromStr for Implementation {
    type Err = MultiplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "r" | "reference" | "cpu-reference" => Ok(Implementation::CpuReference),
            "p" | "parallel" | "cpu-parallel" => Ok(Implementation::CpuParallel),
            // legacy `m` alias for the accelerator
            "c" | "m" | "cuda" | "accelerator" => Ok(Implementation::Cuda),
            _ => match lower.parse::<u32>() {
                Ok(id) => Implementation::try_from(id),
                Err(_) => Err(MultiplyError::UnknownImplementation(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

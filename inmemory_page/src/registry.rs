//! Capability-to-type mapping consulted before a page is materialised.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Environment variable selecting the default [`Hydration`] mode.
pub const HYDRATION_ENV: &str = "INMEMORY_PAGE_HYDRATION";

/// Abstract pagination types a decoder may be asked to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Page,
    Pageable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Page => write!(f, "page"),
            Capability::Pageable => write!(f, "pageable"),
        }
    }
}

/// Concrete types this crate can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    PageModel,
    PageRequest,
}

impl Target {
    pub fn implements(self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Target::PageModel, Capability::Page) | (Target::PageRequest, Capability::Pageable)
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::PageModel => write!(f, "PageModel"),
            Target::PageRequest => write!(f, "PageRequest"),
        }
    }
}

/// Whether decoded page requests go through the bounds check of
/// [`PageRequest::new`](crate::PageRequest::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hydration {
    /// Accept whatever the origin sent.
    #[default]
    Lenient,
    /// Reject negative page numbers and sizes below one.
    Strict,
}

impl Hydration {
    /// Reads [`HYDRATION_ENV`], falling back to [`Hydration::Lenient`].
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(HYDRATION_ENV).ok())
    }

    /// Interprets a configured value; unset or unknown values mean lenient.
    pub fn from_setting(value: Option<String>) -> Self {
        match value {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring unknown {} value {:?}, using lenient hydration",
                    HYDRATION_ENV,
                    value
                );
                Hydration::Lenient
            }),
            None => Hydration::Lenient,
        }
    }
}

impl FromStr for Hydration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Hydration::Lenient),
            "strict" => Ok(Hydration::Strict),
            _ => Err(()),
        }
    }
}

/// A bundle of mappings applied to a registry in one step.
pub trait Module {
    fn name(&self) -> &'static str;

    fn setup_module(&self, registry: &mut TypeRegistry) -> Result<(), Error>;
}

/// Maps [`Capability::Page`] to [`Target::PageModel`] and
/// [`Capability::Pageable`] to [`Target::PageRequest`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PagingModule;

impl PagingModule {
    pub const MAPPINGS: [(Capability, Target); 2] = [
        (Capability::Page, Target::PageModel),
        (Capability::Pageable, Target::PageRequest),
    ];
}

impl Module for PagingModule {
    fn name(&self) -> &'static str {
        "PagingModule"
    }

    fn setup_module(&self, registry: &mut TypeRegistry) -> Result<(), Error> {
        for (capability, target) in Self::MAPPINGS {
            registry.register(capability, target)?;
        }
        Ok(())
    }
}

/// Decoder configuration: which concrete type stands in for each capability,
/// and how strictly page requests are hydrated.
///
/// Built once at startup and then handed to a
/// [`PageDecoder`](crate::PageDecoder), which never changes it.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    mappings: HashMap<Capability, Target>,
    hydration: Hydration,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// An empty registry using the hydration mode from the environment.
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
            hydration: Hydration::from_env(),
        }
    }

    /// A registry with [`PagingModule`] already applied.
    pub fn with_paging_module() -> Self {
        let mut registry = Self::new();
        registry
            .mappings
            .extend(PagingModule::MAPPINGS.iter().copied());
        registry
    }

    pub fn with_hydration(mut self, hydration: Hydration) -> Self {
        self.hydration = hydration;
        self
    }

    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    /// Maps `capability` to `target`, returning the mapping it replaced.
    pub fn register(
        &mut self,
        capability: Capability,
        target: Target,
    ) -> Result<Option<Target>, Error> {
        if !target.implements(capability) {
            return Err(Error::IncompatibleBinding { capability, target });
        }
        let previous = self.mappings.insert(capability, target);
        if previous.is_some() {
            tracing::debug!("Replaced mapping for capability {}", capability);
        }
        Ok(previous)
    }

    pub fn register_module(&mut self, module: &dyn Module) -> Result<(), Error> {
        tracing::debug!("Registering module {}", module.name());
        module.setup_module(self)
    }

    pub fn resolve(&self, capability: Capability) -> Result<Target, Error> {
        self.mappings
            .get(&capability)
            .copied()
            .ok_or(Error::Unmapped(capability))
    }

    /// Publishes this registry as the process-wide one used when serde
    /// decodes `Box<dyn Page<T>>` or `Box<dyn Pageable>`.
    ///
    /// Fails once a registry is installed, including the default one that is
    /// installed implicitly the first time the global decoder is used.
    pub fn install(self) -> Result<(), Error> {
        crate::decoder::install(self)
    }
}

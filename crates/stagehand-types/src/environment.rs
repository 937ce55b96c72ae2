//! Environments and the loader that resolves them by name.

use crate::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Environment a node is compiled in when none is requested.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// A named code environment.
///
/// The module path is carried for callers that inspect it; nothing in
/// stagehand loads code from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    name: String,
    #[serde(default)]
    modulepath: Vec<PathBuf>,
}

impl Environment {
    /// Create a shared environment.
    pub fn create(name: impl Into<String>, modulepath: Vec<PathBuf>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            modulepath,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modulepath(&self) -> &[PathBuf] {
        &self.modulepath
    }
}

/// Resolves an environment identifier to an environment.
pub trait EnvironmentLoader {
    fn get(&self, name: &str) -> Result<Rc<Environment>>;
}

/// In-memory environment loader.
///
/// Resolved environments are cached, so asking twice for the same name from
/// one loader yields the same `Rc`.
#[derive(Debug, Default)]
pub struct Environments {
    known: RefCell<BTreeMap<String, Rc<Environment>>>,
    strict: bool,
}

impl Environments {
    /// A loader that creates any requested environment on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader that only knows the given environments.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let env = Environment::create(name.clone(), Vec::new());
                (name, env)
            })
            .collect();
        Self {
            known: RefCell::new(known),
            strict: true,
        }
    }

    /// Register a pre-built environment.
    pub fn insert(&self, env: Rc<Environment>) {
        self.known.borrow_mut().insert(env.name().to_string(), env);
    }
}

impl EnvironmentLoader for Environments {
    fn get(&self, name: &str) -> Result<Rc<Environment>> {
        if let Some(env) = self.known.borrow().get(name) {
            return Ok(Rc::clone(env));
        }
        if self.strict {
            return Err(FixtureError::UnknownEnvironment(name.to_string()));
        }
        let env = Environment::create(name, Vec::new());
        self.known
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&env));
        Ok(env)
    }
}

//! Scriptable in-memory engine for routing tests.
//!
//! Every trait method counts its invocations so tests can assert how many
//! engine calls a routing decision cost. State is mutated by `install` the
//! way a real engine would: the pair becomes installed and both languages
//! come alive with a capability between them.

use crate::engine::{
    EngineError, LanguageHandle, LanguagePair, PackageDescriptor, TranslationEngine,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockEngine {
    available: Mutex<Vec<PackageDescriptor>>,
    installed: Mutex<Vec<LanguagePair>>,
    languages: Mutex<Vec<LanguageHandle>>,
    capabilities: Mutex<HashSet<(String, String)>>,
    reachable: AtomicBool,
    fail_install: AtomicBool,
    refresh_calls: AtomicUsize,
    available_calls: AtomicUsize,
    installed_calls: AtomicUsize,
    install_calls: AtomicUsize,
    languages_calls: AtomicUsize,
    translate_calls: AtomicUsize,
}

fn descriptor(from: &str, to: &str) -> PackageDescriptor {
    PackageDescriptor {
        from: from.to_string(),
        to: to.to_string(),
        from_name: from.to_string(),
        to_name: to.to_string(),
        id: format!("translate-{}_{}", from, to),
    }
}

impl MockEngine {
    pub fn new() -> Self {
        let engine = Self::default();
        engine.reachable.store(true, Ordering::SeqCst);
        engine
    }

    /// An installable package exists in the index for this pair.
    pub fn with_available(self, from: &str, to: &str) -> Self {
        self.available.lock().unwrap().push(descriptor(from, to));
        self
    }

    /// The pair's package is installed, but no live language handles exist.
    /// Models the package-state/live-state inconsistency.
    pub fn with_installed_package(self, from: &str, to: &str) -> Self {
        self.available.lock().unwrap().push(descriptor(from, to));
        self.installed
            .lock()
            .unwrap()
            .push(LanguagePair::new(from, to));
        self
    }

    /// The pair is fully usable: package installed, both languages live,
    /// capability present.
    pub fn with_installed(self, from: &str, to: &str) -> Self {
        let engine = self.with_installed_package(from, to);
        engine.add_language(from);
        engine.add_language(to);
        engine
            .capabilities
            .lock()
            .unwrap()
            .insert((from.to_string(), to.to_string()));
        engine
    }

    /// A live language handle with no implied capabilities.
    pub fn with_language(self, code: &str) -> Self {
        self.add_language(code);
        self
    }

    fn add_language(&self, code: &str) {
        let mut languages = self.languages.lock().unwrap();
        if !languages.iter().any(|lang| lang.code == code) {
            languages.push(LanguageHandle {
                code: code.to_string(),
                name: code.to_uppercase(),
            });
        }
    }

    /// When unreachable, every engine call fails.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn set_fail_install(&self, fail: bool) {
        self.fail_install.store(fail, Ordering::SeqCst);
    }

    pub fn install_calls(&self) -> usize {
        self.install_calls.load(Ordering::SeqCst)
    }

    pub fn languages_calls(&self) -> usize {
        self.languages_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
            + self.available_calls.load(Ordering::SeqCst)
            + self.installed_calls.load(Ordering::SeqCst)
            + self.install_calls.load(Ordering::SeqCst)
            + self.languages_calls.load(Ordering::SeqCst)
            + self.translate_calls.load(Ordering::SeqCst)
    }

    fn ensure_reachable(&self) -> Result<(), EngineError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(EngineError::UnexpectedStatus {
                status: 503,
                body: "engine unreachable".to_string(),
            })
        }
    }
}

#[async_trait]
impl TranslationEngine for MockEngine {
    async fn refresh_package_index(&self) -> Result<(), EngineError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(EngineError::IndexUnavailable(
                "engine unreachable".to_string(),
            ))
        }
    }

    async fn available_packages(&self) -> Result<Vec<PackageDescriptor>, EngineError> {
        self.available_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_reachable()?;
        Ok(self.available.lock().unwrap().clone())
    }

    async fn installed_packages(&self) -> Result<Vec<LanguagePair>, EngineError> {
        self.installed_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_reachable()?;
        Ok(self.installed.lock().unwrap().clone())
    }

    async fn install(&self, package: &PackageDescriptor) -> Result<(), EngineError> {
        self.install_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_reachable()?;
        if self.fail_install.load(Ordering::SeqCst) {
            return Err(EngineError::InstallFailed("simulated failure".to_string()));
        }

        self.installed.lock().unwrap().push(package.pair());
        self.add_language(&package.from);
        self.add_language(&package.to);
        self.capabilities
            .lock()
            .unwrap()
            .insert((package.from.clone(), package.to.clone()));
        Ok(())
    }

    async fn installed_languages(&self) -> Result<Vec<LanguageHandle>, EngineError> {
        self.languages_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_reachable()?;
        Ok(self.languages.lock().unwrap().clone())
    }

    async fn translate_between(
        &self,
        from: &LanguageHandle,
        to: &LanguageHandle,
        text: &str,
    ) -> Result<Option<String>, EngineError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_reachable()?;

        let capable = self
            .capabilities
            .lock()
            .unwrap()
            .contains(&(from.code.clone(), to.code.clone()));
        if !capable {
            return Ok(None);
        }

        // Deterministic output so tests can assert hop composition
        Ok(Some(format!("{} |{}->{}", text, from.code, to.code)))
    }
}

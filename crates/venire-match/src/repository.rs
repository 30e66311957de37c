//! In-memory repository: the fake that keeps the scoring core fully
//! unit-testable, and a reasonable default for embedding hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use venire_core::errors::{VenireError, VenireResult};
use venire_core::evidence::JurorEvidence;
use venire_core::models::MatchUpdateRecord;
use venire_core::traits::IMatchRepository;
use venire_core::PersonaCatalog;

/// Thread-safe in-memory implementation of [`IMatchRepository`].
pub struct MemoryRepository {
    catalog: RwLock<Option<Arc<PersonaCatalog>>>,
    evidence: RwLock<HashMap<String, JurorEvidence>>,
    probabilities: RwLock<HashMap<String, HashMap<String, f64>>>,
    updates: RwLock<Vec<MatchUpdateRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(None),
            evidence: RwLock::new(HashMap::new()),
            probabilities: RwLock::new(HashMap::new()),
            updates: RwLock::new(Vec::new()),
        }
    }

    /// Install the persona catalog served to the engine.
    pub fn set_catalog(&self, catalog: PersonaCatalog) {
        if let Ok(mut slot) = self.catalog.write() {
            *slot = Some(Arc::new(catalog));
        }
    }

    fn lock_poisoned() -> VenireError {
        VenireError::Repository("in-memory lock poisoned".to_string())
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl IMatchRepository for MemoryRepository {
    fn juror_evidence(&self, juror_id: &str) -> VenireResult<Option<JurorEvidence>> {
        let evidence = self.evidence.read().map_err(|_| Self::lock_poisoned())?;
        Ok(evidence.get(juror_id).cloned())
    }

    fn store_juror_evidence(&self, log: &JurorEvidence) -> VenireResult<()> {
        let mut evidence = self.evidence.write().map_err(|_| Self::lock_poisoned())?;
        evidence.insert(log.juror_id.clone(), log.clone());
        Ok(())
    }

    fn persona_catalog(&self) -> VenireResult<Arc<PersonaCatalog>> {
        let catalog = self.catalog.read().map_err(|_| Self::lock_poisoned())?;
        catalog
            .clone()
            .ok_or_else(|| VenireError::Validation("no persona catalog installed".to_string()))
    }

    fn last_probabilities(&self, juror_id: &str) -> VenireResult<HashMap<String, f64>> {
        let probabilities = self
            .probabilities
            .read()
            .map_err(|_| Self::lock_poisoned())?;
        Ok(probabilities.get(juror_id).cloned().unwrap_or_default())
    }

    fn store_probabilities(
        &self,
        juror_id: &str,
        current: &HashMap<String, f64>,
    ) -> VenireResult<()> {
        let mut probabilities = self
            .probabilities
            .write()
            .map_err(|_| Self::lock_poisoned())?;
        probabilities.insert(juror_id.to_string(), current.clone());
        Ok(())
    }

    fn append_update(&self, record: &MatchUpdateRecord) -> VenireResult<()> {
        let mut updates = self.updates.write().map_err(|_| Self::lock_poisoned())?;
        updates.push(record.clone());
        Ok(())
    }

    fn updates_for(&self, juror_id: &str) -> VenireResult<Vec<MatchUpdateRecord>> {
        let updates = self.updates.read().map_err(|_| Self::lock_poisoned())?;
        Ok(updates
            .iter()
            .filter(|r| r.juror_id == juror_id)
            .cloned()
            .collect())
    }
}

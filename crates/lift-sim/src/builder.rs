//! Fluent builder for constructing a [`SimulationService`].

use lift_core::SimSettings;
use lift_policy::PolicyKind;
use lift_workload::Burst;

use crate::{SimError, SimResult, SimulationService};

/// Fluent builder for [`SimulationService`].
///
/// # Required inputs
///
/// - at least one `.policy(..)` — duplicates collapse to one instance
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                    |
/// |-----------------|--------------------------------------------|
/// | `.settings(s)`  | [`SimSettings::default`]                   |
/// | `.seed(n)`      | `0`                                        |
/// | `.bursts(v)`    | empty (call `randomize_bursts` or load)    |
///
/// # Example
///
/// ```rust,ignore
/// let mut service = ServiceBuilder::new()
///     .settings(SimSettings::clamped(10, 2, 100, 400))
///     .seed(42)
///     .policy(PolicyKind::Basic)
///     .policy(PolicyKind::Advanced)
///     .build()?;
/// service.start();
/// service.run_until_settled(&mut NoopObserver);
/// ```
#[derive(Default)]
pub struct ServiceBuilder {
    settings: Option<SimSettings>,
    seed:     Option<u64>,
    policies: Vec<PolicyKind>,
    bursts:   Option<Vec<Burst>>,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the initial settings.  Defaults to the smallest legal
    /// building (see [`SimSettings::default`]).
    pub fn settings(mut self, settings: SimSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Seed the master RNG.  Two services built with the same seed, bursts,
    /// and injection sequence produce identical runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add an instance running `kind`'s policy.  Repeated kinds are
    /// collapsed at build time.
    pub fn policy(mut self, kind: PolicyKind) -> Self {
        self.policies.push(kind);
        self
    }

    /// Supply a pre-built burst descriptor set (e.g. from
    /// [`lift_workload::load_bursts_csv`]).
    pub fn bursts(mut self, bursts: Vec<Burst>) -> Self {
        self.bursts = Some(bursts);
        self
    }

    /// Validate inputs and return a ready-to-run [`SimulationService`].
    pub fn build(self) -> SimResult<SimulationService> {
        if self.policies.is_empty() {
            return Err(SimError::Config(
                "at least one dispatch policy is required".into(),
            ));
        }

        let settings = self.settings.unwrap_or_default();
        let mut service = SimulationService::new(settings, self.seed.unwrap_or(0));
        for kind in self.policies {
            service.add_instance(kind);
        }
        if let Some(bursts) = self.bursts {
            service.set_bursts(bursts);
        }
        Ok(service)
    }
}

use crate::core::forcefield::params::ForcefieldParams;
use crate::core::forcefield::scoring::Scorer;
use crate::core::forcefield::term::EnergyBreakdown;
use crate::core::models::molecule::Molecule;
use crate::engine::config::MinimizationConfig;
use crate::engine::error::EngineError;
use crate::engine::minimizer;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Energy of the working structure after `step` completed iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyTracePoint {
    pub step: usize,
    pub energy: EnergyBreakdown,
}

#[derive(Debug, Clone)]
pub struct MinimizationResult {
    pub molecule: Molecule,
    pub initial_energy: EnergyBreakdown,
    pub final_energy: EnergyBreakdown,
    /// One point per completed chunk, in step order.
    pub trace: Vec<EnergyTracePoint>,
    pub steps_taken: usize,
}

impl MinimizationResult {
    /// Change in total energy; negative when the structure relaxed.
    pub fn energy_change(&self) -> f64 {
        self.final_energy.total() - self.initial_energy.total()
    }
}

#[instrument(skip_all, name = "minimization_workflow", fields(molecule = %molecule.name, atoms = molecule.atom_count()))]
pub fn run(
    molecule: &Molecule,
    config: &MinimizationConfig,
    reporter: &ProgressReporter,
) -> Result<MinimizationResult, EngineError> {
    // === Phase 1: Preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    config.validate()?;
    let params = match &config.forcefield_path {
        Some(path) => {
            info!(path = %path.display(), "Loading force field parameter overrides.");
            let params = ForcefieldParams::load(path)?;
            reporter.report(Progress::Message(format!(
                "Loaded parameter overrides from {} ({} element entries)",
                path.display(),
                params.lennard_jones_overrides.len()
            )));
            params
        }
        None => ForcefieldParams::default(),
    };
    let scorer = Scorer::new(&params);
    let initial_energy = scorer.score(molecule);
    info!(energy = %initial_energy, "Initial energy evaluated.");
    reporter.report(Progress::Energy {
        step: 0,
        energy: initial_energy,
    });
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Chunked steepest descent ===
    reporter.report(Progress::PhaseStart {
        name: "Minimization",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.total_steps as u64,
    });

    let mut working = molecule.clone();
    let mut trace = Vec::new();
    let mut steps_taken = 0;
    while steps_taken < config.total_steps {
        let chunk = config.chunk_size.min(config.total_steps - steps_taken);
        working = minimizer::minimize_with(
            &working,
            chunk,
            config.step_size,
            config.max_force,
            &params,
        );
        steps_taken += chunk;
        ensure_finite(&working, steps_taken)?;

        let energy = scorer.score(&working);
        debug!(step = steps_taken, total = energy.total(), "Chunk complete.");
        trace.push(EnergyTracePoint {
            step: steps_taken,
            energy,
        });
        reporter.report(Progress::TaskIncrement {
            steps: chunk as u64,
        });
        reporter.report(Progress::Energy {
            step: steps_taken,
            energy,
        });
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let final_energy = trace.last().map_or(initial_energy, |p| p.energy);
    info!(
        steps = steps_taken,
        initial_total = initial_energy.total(),
        final_total = final_energy.total(),
        "Minimization complete."
    );

    Ok(MinimizationResult {
        molecule: working,
        initial_energy,
        final_energy,
        trace,
        steps_taken,
    })
}

fn ensure_finite(molecule: &Molecule, step: usize) -> Result<(), EngineError> {
    match molecule
        .atoms()
        .iter()
        .position(|a| !a.position.coords.iter().all(|c| c.is_finite()))
    {
        Some(atom) => Err(EngineError::NonFinitePosition { atom, step }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{ConfigError, MinimizationConfigBuilder};
    use nalgebra::Point3;
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn config(total: usize, chunk: usize) -> MinimizationConfig {
        MinimizationConfigBuilder::new()
            .total_steps(total)
            .chunk_size(chunk)
            .step_size(0.005)
            .build()
            .unwrap()
    }

    #[test]
    fn chunked_run_matches_single_kernel_call() {
        let mol = Molecule::demo_caffeine();
        let result = run(&mol, &config(120, 50), &ProgressReporter::new()).unwrap();

        let direct = minimizer::minimize(&mol, 120, 0.005);
        assert_eq!(result.steps_taken, 120);
        assert_eq!(result.molecule.atoms(), direct.atoms());

        let steps: Vec<usize> = result.trace.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![50, 100, 120]);
        assert_eq!(result.final_energy, result.trace[2].energy);
    }

    #[test]
    fn reports_phases_and_chunk_increments() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run(&Molecule::demo_caffeine(), &config(25, 10), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let increments: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                Progress::TaskIncrement { steps } => Some(*steps),
                _ => None,
            })
            .collect();
        assert_eq!(increments, vec![10, 10, 5]);
        assert!(matches!(
            events.first(),
            Some(Progress::PhaseStart {
                name: "Preparation"
            })
        ));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Progress::TaskStart { total_steps: 25 }))
        );
    }

    #[test]
    fn zero_steps_returns_input_geometry() {
        let mol = Molecule::demo_caffeine();
        let result = run(&mol, &config(0, 50), &ProgressReporter::new()).unwrap();
        assert_eq!(result.steps_taken, 0);
        assert!(result.trace.is_empty());
        assert_eq!(result.molecule.atoms(), mol.atoms());
        assert_eq!(result.energy_change(), 0.0);
    }

    #[test]
    fn stretched_bond_relaxes() {
        let mut builder = crate::core::models::builder::MoleculeBuilder::new("co");
        builder.add_atom("C", "C", Point3::origin());
        builder.add_atom("O", "O", Point3::new(2.0, 0.0, 0.0));
        builder.add_bond(0, 1, crate::core::models::topology::BondOrder::Single);
        let mol = builder.build(&crate::core::models::ids::SequentialIdGenerator::new("m"));

        let result = run(&mol, &config(100, 20), &ProgressReporter::new()).unwrap();
        assert!(result.final_energy.bond < result.initial_energy.bond);
        assert!(result.energy_change() < 0.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = config(10, 5);
        cfg.chunk_size = 0;
        let err = run(&Molecule::demo_caffeine(), &cfg, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config {
                source: ConfigError::InvalidParameter {
                    name: "chunk_size",
                    ..
                }
            }
        ));
    }

    #[test]
    fn missing_parameter_file_is_reported() {
        let dir = tempdir().unwrap();
        let mut cfg = config(10, 5);
        cfg.forcefield_path = Some(dir.path().join("absent.toml"));
        let err = run(&Molecule::demo_caffeine(), &cfg, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::Parameters { .. }));
    }

    #[test]
    fn loaded_overrides_are_announced_and_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(
            &path,
            "bond-force-constant = 150.0\n[elements.N]\nsigma = 3.3\nepsilon = 0.2\n",
        )
        .unwrap();
        let mut cfg = config(10, 5);
        cfg.forcefield_path = Some(path.clone());

        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));
        let mol = Molecule::demo_caffeine();
        let result = run(&mol, &cfg, &reporter).unwrap();
        drop(reporter);

        let messages = messages.into_inner().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains(&path.display().to_string()));
        assert!(messages[0].contains("1 element entries"));

        let params = ForcefieldParams::load(&path).unwrap();
        let expected = Scorer::new(&params).score(&mol);
        let defaults = Scorer::new(&ForcefieldParams::default()).score(&mol);
        assert!((result.initial_energy.total() - expected.total()).abs() < 1e-9);
        assert!((result.initial_energy.bond - defaults.bond).abs() > 1e-6);
    }

    #[test]
    fn default_parameters_emit_no_message() {
        let messages = Mutex::new(0usize);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::Message(_)) {
                *messages.lock().unwrap() += 1;
            }
        }));
        run(&Molecule::demo_caffeine(), &config(10, 5), &reporter).unwrap();
        drop(reporter);
        assert_eq!(messages.into_inner().unwrap(), 0);
    }

    #[test]
    fn non_finite_positions_abort_the_run() {
        let mut builder = crate::core::models::builder::MoleculeBuilder::new("bad");
        builder.add_atom("C", "C1", Point3::origin());
        builder.add_atom("C", "C2", Point3::new(f64::NAN, 0.0, 0.0));
        builder.add_bond(0, 1, crate::core::models::topology::BondOrder::Single);
        let mol = builder.build(&crate::core::models::ids::SequentialIdGenerator::new("m"));

        let err = run(&mol, &config(10, 5), &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::NonFinitePosition { atom: 0, step: 5 }
        ));
    }
}

//! Aerotrim - Lifting-Surface Beam Geometry and Trim Demo
//!
//! Builds an analytic planform mesh, extracts the structural beam geometry,
//! and trims a linearized longitudinal surrogate to target lift and moment
//! coefficients.
//!
//! # Usage
//!
//! ```bash
//! aerotrim --sweep 25 --taper 0.5 --spanwise 9 --target-cl 0.5 --target-cm 0.0
//! ```

use clap::Parser;

use aerotrim_core::{
    error::Result,
    extract_beam_geometry,
    mesh::PlanformConfig,
    surface::{FlightCondition, SurfaceConfig},
    trim::{Jacobian, LinearAnalysis},
    TrimSolver,
};

/// Lifting-surface beam geometry and trim demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Semispan in meters
    #[arg(long, default_value_t = 10.0)]
    semispan: f64,

    /// Root chord in meters
    #[arg(long, default_value_t = 2.0)]
    root_chord: f64,

    /// Taper ratio (tip chord / root chord)
    #[arg(long, default_value_t = 1.0)]
    taper: f64,

    /// Leading-edge sweep in degrees
    #[arg(long, default_value_t = 0.0)]
    sweep: f64,

    /// Dihedral in degrees
    #[arg(long, default_value_t = 0.0)]
    dihedral: f64,

    /// Linear tip twist in degrees
    #[arg(long, default_value_t = 0.0)]
    tip_twist: f64,

    /// Number of chordwise stations
    #[arg(long, default_value_t = 2)]
    chordwise: usize,

    /// Number of spanwise stations
    #[arg(long, default_value_t = 5)]
    spanwise: usize,

    /// Target lift coefficient
    #[arg(long, default_value_t = 0.5)]
    target_cl: f64,

    /// Target pitching-moment coefficient
    #[arg(long, default_value_t = 0.0)]
    target_cm: f64,

    /// Trim convergence tolerance on the error norm
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,

    /// Maximum Newton iterations
    #[arg(long, default_value_t = 50)]
    max_iterations: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build the planform mesh
    let mesh = PlanformConfig::new()
        .with_semispan(args.semispan)
        .with_root_chord(args.root_chord)
        .with_taper(args.taper)
        .with_sweep(args.sweep)
        .with_dihedral(args.dihedral)
        .with_tip_twist(args.tip_twist)
        .with_grid(args.chordwise, args.spanwise)
        .build()?;

    // Extract beam geometry along the elastic axis
    let surface = SurfaceConfig::new("wing");
    let elements = extract_beam_geometry(&mesh, &surface.profile)?;

    println!("Beam geometry ({} elements):", elements.len());
    println!("{:>8} {:>14} {:>12} {:>14}", "element", "streamwise [m]", "fem [m]", "twist [deg]");
    for (i, element) in elements.iter().enumerate() {
        println!(
            "{:>8} {:>14.4} {:>12.4} {:>14.4}",
            i,
            element.streamwise_chord,
            element.fem_chord,
            element.fem_twist.to_degrees()
        );
    }

    // Trim a linearized longitudinal surrogate: CL and CM as affine
    // functions of angle of attack and tail twist, both in degrees.
    let condition = FlightCondition::default();
    let derivatives = Jacobian::from_row_major(2, 2, vec![0.08, 0.02, -0.01, 0.03])?;
    let mut analysis = LinearAnalysis::new(derivatives, vec![surface.cl0, 0.0])?;

    let solver = TrimSolver::new()
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations);
    let solution = solver.solve(
        &mut analysis,
        &[condition.alpha, 0.0],
        &[args.target_cl, args.target_cm],
    )?;

    println!();
    println!(
        "Trimmed in {} iterations: alpha = {:.4} deg, tail twist = {:.4} deg",
        solution.iterations, solution.controls[0], solution.controls[1]
    );
    println!(
        "Coefficients: CL = {:.6}, CM = {:.6}",
        solution.coefficients[0], solution.coefficients[1]
    );
    println!("Residual history: {:?}", solution.residual_history);

    Ok(())
}

//! Basic Linear Programming Example
//!
//! Solves a small production-planning LP with the tableau simplex method:
//!
//! maximize    30*x1 + 60*x2 + 120*x3
//! subject to  x1 <= 100, x2 <= 25, x3 <= 10,
//!             x1 + 2*x2 + 3*x3 <= 150, x >= 0

use tableau_simplex::prelude::*;

fn main() -> Result<()> {
    println!("=== Basic Linear Program ===\n");

    println!("Problem: Maximize 30*x1 + 60*x2 + 120*x3");
    println!("Subject to:");
    println!("  x1 <= 100");
    println!("  x2 <= 25");
    println!("  x3 <= 10");
    println!("  x1 + 2*x2 + 3*x3 <= 150");
    println!("  x >= 0\n");

    // Maximization enters the tableau as negated minimization coefficients.
    let mut solver = SimplexSolver::new(vec![-30.0, -60.0, -120.0]);

    solver.add_constraint(vec![1.0, 0.0, 0.0], 100.0)?;
    solver.add_constraint(vec![0.0, 1.0, 0.0], 25.0)?;
    solver.add_constraint(vec![0.0, 0.0, 1.0], 10.0)?;
    solver.add_constraint(vec![1.0, 2.0, 3.0], 150.0)?;

    println!("Solving...");
    solver.solve()?;

    let solution = solver.solution()?;

    println!("\nResults:");
    println!("  Status: {:?}", solver.status());
    println!("  Pivots: {}", solution.pivots());
    println!("  Optimal profit: {:.4}", solution.objective());
    for (i, value) in solution.decision_values().iter().enumerate() {
        println!("  x{} = {:.4}", i + 1, value);
    }

    Ok(())
}

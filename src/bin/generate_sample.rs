//! Writes a deterministic synthetic enrollment CSV for demos and manual
//! testing. Same seed, same file, every run.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = 2015..=2024;
    // (term, applications multiplier): Fall intake runs larger than Spring.
    let terms = [("Spring", 0.85), ("Fall", 1.0)];
    // (department, share of enrolled students)
    let departments = [
        ("Engineering", 0.35),
        ("Business", 0.25),
        ("Arts", 0.15),
        ("Science", 0.25),
    ];

    let output_path = "sample_enrollment.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut header = vec![
        "Year".to_string(),
        "Term".to_string(),
        "Applications".to_string(),
        "Admitted".to_string(),
        "Enrolled".to_string(),
        "Retention Rate (%)".to_string(),
        "Student Satisfaction (%)".to_string(),
    ];
    header.extend(departments.iter().map(|(d, _)| format!("{d} Enrolled")));
    writer.write_record(&header).expect("Failed to write header");

    let mut rows = 0usize;
    for year in years {
        let growth = (year - 2015) as f64;

        for &(term, term_factor) in &terms {
            let applications =
                ((2400.0 + growth * 120.0) * term_factor + rng.gauss(0.0, 80.0)).max(0.0) as u64;
            let admitted = (applications as f64 * (0.72 + rng.gauss(0.0, 0.02))).max(0.0) as u64;
            let enrolled = (admitted as f64 * (0.68 + rng.gauss(0.0, 0.02)))
                .max(0.0)
                .min(admitted as f64) as u64;
            let retention = (82.0 + growth * 0.9 + rng.gauss(0.0, 1.2)).clamp(0.0, 100.0);
            let satisfaction = (78.0 + growth * 0.7 + rng.gauss(0.0, 1.5)).clamp(0.0, 100.0);

            let mut row = vec![
                year.to_string(),
                term.to_string(),
                applications.to_string(),
                admitted.to_string(),
                enrolled.to_string(),
                format!("{retention:.1}"),
                format!("{satisfaction:.1}"),
            ];
            // Rounding shares down keeps the department sum within `enrolled`.
            row.extend(
                departments
                    .iter()
                    .map(|(_, share)| ((enrolled as f64 * share) as u64).to_string()),
            );
            writer.write_record(&row).expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {rows} enrollment records to {output_path}");
}

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

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Mirrors the shape of the Washington State EV population extract:
    // mostly WA registrations with a handful of out-of-state rows.
    let wa_cities = [
        "Seattle", "Bellevue", "Olympia", "Tacoma", "Spokane", "Vancouver", "Redmond", "Kirkland",
    ];
    let other: [(&str, &[&str]); 3] = [
        ("CA", &["Fresno", "Oakland", "San Diego"]),
        ("OR", &["Portland", "Salem"]),
        ("TX", &["Austin", "Houston"]),
    ];
    let makes = [
        "TESLA", "NISSAN", "CHEVROLET", "FORD", "BMW", "KIA", "TOYOTA", "VOLKSWAGEN",
    ];
    let ev_types = [
        "Battery Electric Vehicle (BEV)",
        "Plug-in Hybrid Electric Vehicle (PHEV)",
    ];
    let years: Vec<String> = (2011..=2024).map(|y| y.to_string()).collect();

    let output_path = "data/Electric_Vehicle_Population_Data.csv";
    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "VIN (1-10)",
            "State",
            "Model Year",
            "Make",
            "City",
            "Electric Vehicle Type",
            "Electric Range",
        ])
        .expect("Failed to write header");

    let n_rows = 2000;
    for i in 0..n_rows {
        let (state, city) = if rng.next_f64() < 0.9 {
            ("WA", *rng.choose(&wa_cities))
        } else {
            let (state, cities) = rng.choose(&other);
            (*state, *rng.choose(cities))
        };

        let make = rng.choose(&makes);
        let ev_type = rng.choose(&ev_types);
        let year = rng.choose(&years);
        let range = if ev_type.starts_with("Battery") {
            80 + (rng.next_u64() % 280)
        } else {
            10 + (rng.next_u64() % 40)
        };

        writer
            .write_record([
                format!("5YJ{i:07}"),
                state.to_string(),
                year.clone(),
                make.to_string(),
                city.to_string(),
                ev_type.to_string(),
                range.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} records to {output_path}");
}

use gratings::patterns::{gaussian, grating, spot};
use gratings::{FieldConfig, Gaussian, Grating, Mesh, Pattern, Spot};
use rand::distributions::{Distribution, Uniform};

const TRIALS: usize = 50;

#[test]
fn test_mesh_properties() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let sizes = Uniform::new(0.5, 20.0);
    let densities = Uniform::new(1.0, 20.0);

    for _ in 0..TRIALS {
        let config = FieldConfig::new(sizes.sample(&mut rng), sizes.sample(&mut rng), densities.sample(&mut rng));
        let mesh = Mesh::new(&config);
        let (cols, rows) = config.samples();

        assert_eq!(mesh.x().dim(), mesh.y().dim());
        assert_eq!(mesh.shape(), (rows, cols));
        for row in mesh.x().rows() {
            for pair in row.windows(2) {
                assert!(pair[1] > pair[0], "x not increasing for {:?}", config);
            }
        }
        for col in mesh.y().columns() {
            for pair in col.windows(2) {
                assert!(pair[1] > pair[0], "y not increasing for {:?}", config);
            }
        }
    }
    Ok(())
}

#[test]
fn test_grating_range_and_peak() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let freqs = Uniform::new(0.1, 5.0);
    let angles = Uniform::new(0.0, 360.0);
    // 101 samples per axis puts a sample on the center
    let mesh = Mesh::xycoords(10.0, 10.0, 10.1);
    assert_eq!(mesh.shape(), (101, 101));

    for _ in 0..TRIALS {
        let sf = freqs.sample(&mut rng);
        let orient = angles.sample(&mut rng);
        let field = grating(&mesh, sf, orient, angles.sample(&mut rng));
        assert!(field.iter().all(|v| (-1.0..=1.0).contains(v)));

        let flat = grating(&mesh, sf, orient, 0.0);
        assert!((flat[[50, 50]] - 1.0).abs() < 1e-9);
        let (cx, cy) = mesh.center();
        assert!((Grating::new(sf, orient, 0.0).value_at(cx, cy) - 1.0).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_gaussian_peak_and_falloff() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let stds = Uniform::new(0.2, 3.0);
    let centers = Uniform::new(-4.0, 4.0);

    for _ in 0..TRIALS {
        let g = Gaussian::new(stds.sample(&mut rng), stds.sample(&mut rng))
            .with_center(centers.sample(&mut rng), centers.sample(&mut rng));
        let (cx, cy) = g.center;
        assert_eq!(g.envelope_at(cx, cy), 1.0);

        // strictly decreasing out to three standard deviations along each axis
        let mut last_x = 1.0;
        let mut last_y = 1.0;
        for step in 1..=30 {
            let d = step as f64 * 0.1;
            let vx = g.envelope_at(cx + d * g.x_std, cy);
            let vy = g.envelope_at(cx, cy - d * g.y_std);
            assert!(vx < last_x);
            assert!(vy < last_y);
            last_x = vx;
            last_y = vy;
        }
    }
    Ok(())
}

#[test]
fn test_gaussian_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let thresholds = Uniform::new(0.001, 0.9);
    let mesh = Mesh::new(&FieldConfig::default());

    for _ in 0..TRIALS {
        let t = thresholds.sample(&mut rng);
        let field = gaussian(&mesh, 1.5, 0.75, (0.5, -1.0), t);
        assert!(field.iter().all(|&v| v == 0.0 || v > t), "threshold {} violated", t);
    }
    Ok(())
}

#[test]
fn test_spot_mask() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();
    let coords = Uniform::new(-3.0, 3.0);
    let halves = Uniform::new(0.1, 2.0);
    let fractions = Uniform::new(0.0, 0.99);

    for _ in 0..TRIALS {
        let s = Spot::new(
            (coords.sample(&mut rng), coords.sample(&mut rng)),
            halves.sample(&mut rng),
            halves.sample(&mut rng),
            coords.sample(&mut rng),
        );
        let (cx, cy) = s.center;
        let fx = fractions.sample(&mut rng);
        let fy = fractions.sample(&mut rng);

        assert_eq!(s.value_at(cx + fx * s.half_width, cy - fy * s.half_height), s.value);
        assert_eq!(s.value_at(cx + s.half_width * 1.01, cy), 0.0);
        assert_eq!(s.value_at(cx, cy - s.half_height * 1.01), 0.0);
    }

    // exactly on the edge counts as outside
    let s = Spot::new((0.0, 0.0), 0.5, 0.25, 1.0);
    assert_eq!(s.value_at(0.5, 0.0), 0.0);
    assert_eq!(s.value_at(0.0, -0.25), 0.0);

    let mesh = Mesh::normalized(9);
    let field = spot(&mesh, (0.0, 0.0), 0.5, 0.5, -1.0);
    assert_eq!(field.iter().filter(|&&v| v == -1.0).count(), 9);
    Ok(())
}

use rand::Rng;

pub const DEFAULT_PARTICLES: usize = 50;
pub const LINK_DISTANCE: f64 = 150.0;
const MAX_SPEED: f64 = 0.25;
const MIN_RADIUS: f64 = 1.0;
const MAX_RADIUS: f64 = 3.0;
const LINK_ALPHA: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Segment between two nearby particles, faded by distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Drifting dots for the hero background. Particles bounce off the edges.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..=width.max(0.0)),
                y: rng.gen_range(0.0..=height.max(0.0)),
                vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
                vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
                radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Particles left outside a shrunken area are pulled back to its edge.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let (w, h) = (width.max(0.0), height.max(0.0));
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, w);
            p.y = p.y.clamp(0.0, h);
        }
    }

    /// Advances one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
        }
    }

    /// Every unordered pair closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                (distance < LINK_DISTANCE).then(|| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha: LINK_ALPHA * (1.0 - distance / LINK_DISTANCE),
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
        }
    }

    #[test]
    fn test_spawn_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(DEFAULT_PARTICLES, 800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), DEFAULT_PARTICLES);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&p.radius));
        }
    }

    #[test]
    fn test_bounce_off_edges() {
        let mut field =
            ParticleField::from_particles(vec![particle(99.9, 50.0, 0.2, 0.0)], 100.0, 100.0);
        field.step();
        assert!(field.particles()[0].vx < 0.0);
        field.step();
        assert!(field.particles()[0].x < 100.0);
    }

    #[test]
    fn test_shrinking_keeps_particles_inside() {
        let mut field = ParticleField::from_particles(
            vec![particle(700.0, 500.0, 0.2, 0.2), particle(10.0, 10.0, 0.1, 0.0)],
            800.0,
            600.0,
        );
        field.resize(300.0, 200.0);
        assert_eq!(field.size(), (300.0, 200.0));
        assert_eq!((field.particles()[0].x, field.particles()[0].y), (300.0, 200.0));
        assert_eq!((field.particles()[1].x, field.particles()[1].y), (10.0, 10.0));

        field.step();
        let p = field.particles()[0];
        assert!(p.vx < 0.0 && p.vy < 0.0);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let field = ParticleField::from_particles(
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(75.0, 0.0, 0.0, 0.0),
                particle(500.0, 500.0, 0.0, 0.0),
            ],
            600.0,
            600.0,
        );
        let links: Vec<_> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.1).abs() < 1e-9);
    }
}

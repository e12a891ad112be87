use argh::FromArgs;
use kornia_augmentation::affine::{rotate, sample_angles, RandomTranslationMatrix, SamplingRange};
use kornia_tensor::{Tensor3, Tensor4};
use rand::{rngs::StdRng, SeedableRng};

/// Randomly rotates a synthetic image batch and reports the sampled parameters
#[derive(Debug, FromArgs)]
struct Args {
    /// maximum absolute rotation angle in degrees
    #[argh(option, short = 'd', default = "30.0")]
    degrees: f32,

    /// maximum absolute translation in pixels
    #[argh(option, short = 't', default = "4.0")]
    translation: f32,

    /// number of images in the batch
    #[argh(option, short = 'b', default = "4")]
    batch_size: usize,

    /// image side length in pixels
    #[argh(option, short = 's', default = "32")]
    size: usize,

    /// seed of the random number generator
    #[argh(option, default = "42")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut rng = StdRng::seed_from_u64(args.seed);

    // a batch of white squares on a black background
    let (n, quarter) = (args.size, args.size / 4);
    let images = Tensor4::from_shape_fn([args.batch_size, 1, n, n], |[_, _, y, x]| {
        let inside = (quarter..n - quarter).contains(&y) && (quarter..n - quarter).contains(&x);
        if inside {
            1.0
        } else {
            0.0
        }
    });

    // sample one angle per image and rotate about the image center
    let range = SamplingRange::symmetric(args.degrees)?;
    let angles = sample_angles(&range, args.batch_size, &mut rng)?;
    let rotated = rotate(&images, &angles, None)?;

    // sample translations of the square corners
    let mut translation = RandomTranslationMatrix::new(&[args.translation])?;
    let corners = Tensor3::from_shape_fn([args.batch_size, 3, 1], |[_, i, _]| match i {
        0 | 1 => quarter as f32,
        _ => 1.0,
    });
    let moved = translation.apply(&corners, &mut rng)?;

    for (b, angle) in angles.as_slice().iter().enumerate() {
        let plane = &rotated.as_slice()[b * n * n..(b + 1) * n * n];
        let mass: f32 = plane.iter().sum();
        let corner = &moved.as_slice()[b * 3..b * 3 + 2];
        println!(
            "image {b}: angle {angle:.2} deg, mass {mass:.1}, corner moved to ({:.2}, {:.2})",
            corner[0], corner[1]
        );
    }

    Ok(())
}

//! Customizing how an `ArrayPool` creates and resets its items.
//!
//! A pool of 3D vectors always hands out vectors with exactly three components. Released
//! vectors are zeroed instead of emptied so they keep that shape.

use array_pool::ArrayPool;

fn main() {
    let mut vectors = ArrayPool::builder()
        .factory(|| vec![0.0_f32; 3])
        .reclaim(|v: &mut Vec<f32>| v.fill(0.0))
        .initial_capacity(16)
        .build();

    let mut velocity = vectors.acquire();
    velocity.copy_from_slice(&[1.0, -2.0, 0.5]);
    println!("Velocity: {velocity:?}");

    vectors.release(velocity);

    let reused = vectors.acquire();
    println!("Reused vector after release: {reused:?}");
    println!("Pool: {vectors:?}");
}

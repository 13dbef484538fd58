//! Basic usage of the `array_pool` crate:
//!
//! * Creating a pool.
//! * Acquiring buffers inside a frame loop.
//! * Releasing them so the next frame reuses the allocations.

use array_pool::ArrayPool;

fn main() {
    let mut pool = ArrayPool::<Vec<[f32; 2]>>::new();

    for frame in 0..5_u8 {
        // The first frame creates new buffers. Every later frame gets the same ones back.
        let mut vertices = pool.acquire();
        vertices.extend((0..8_u8).map(|i| [f32::from(i), f32::from(frame)]));

        println!(
            "Frame {frame}: {} vertices in a buffer with capacity {}",
            vertices.len(),
            vertices.capacity()
        );

        // Releasing clears the buffer and tells us how many buffers are waiting in the pool.
        let pooled = pool.release(vertices);
        println!("Frame {frame}: pool now holds {pooled} buffer(s)");
    }
}

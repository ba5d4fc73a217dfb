/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) & 1;
            img[y * width + x] = if parity == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Black image with a single bright pixel at `(x, y)`.
pub fn isolated_point_u8(width: usize, height: usize, x: usize, y: usize, value: u8) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    img[y * width + x] = value;
    img
}

/// Dark background with a bright axis-aligned square `[x0, x1) × [y0, y1)`.
pub fn square_u8(
    width: usize,
    height: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    fg: u8,
    bg: u8,
) -> Vec<u8> {
    let mut img = vec![bg; width * height];
    for y in y0..y1 {
        for x in x0..x1 {
            img[y * width + x] = fg;
        }
    }
    img
}

/// Deterministic pseudo-random noise (64-bit LCG), reproducible across runs.
pub fn noise_u8(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

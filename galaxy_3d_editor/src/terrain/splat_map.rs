/// Splat map - per-vertex blend weights of four terrain texture layers
///
/// Weights of a vertex always sum to one. Painting a channel raises its
/// weight and scales the others down.

/// Texture layer of a splat map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplatChannel {
    R,
    G,
    B,
    A,
}

impl SplatChannel {
    pub const ALL: [SplatChannel; 4] = [SplatChannel::R, SplatChannel::G, SplatChannel::B, SplatChannel::A];

    pub fn index(&self) -> usize {
        match self {
            SplatChannel::R => 0,
            SplatChannel::G => 1,
            SplatChannel::B => 2,
            SplatChannel::A => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplatMap {
    resolution: u32,
    weights: Vec<[f32; 4]>,
}

impl SplatMap {
    /// Fully weighted on channel R
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            weights: vec![[1.0, 0.0, 0.0, 0.0]; (resolution * resolution) as usize],
        }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn weights(&self, x: u32, z: u32) -> Option<[f32; 4]> {
        self.index(x, z).map(|i| self.weights[i])
    }

    pub fn weight(&self, x: u32, z: u32, channel: SplatChannel) -> Option<f32> {
        self.weights(x, z).map(|w| w[channel.index()])
    }

    /// Add `amount` (may be negative) to a channel, then renormalize.
    ///
    /// A vertex left with no weight at all falls back to channel R.
    /// Returns false if the vertex is out of range.
    pub fn paint(&mut self, x: u32, z: u32, channel: SplatChannel, amount: f32) -> bool {
        let Some(i) = self.index(x, z) else {
            return false;
        };

        let weights = &mut self.weights[i];
        let c = channel.index();
        weights[c] = (weights[c] + amount).clamp(0.0, 1.0);

        let total: f32 = weights.iter().sum();
        if total <= f32::EPSILON {
            *weights = [1.0, 0.0, 0.0, 0.0];
        } else {
            for w in weights.iter_mut() {
                *w /= total;
            }
        }
        true
    }

    fn index(&self, x: u32, z: u32) -> Option<usize> {
        (x < self.resolution && z < self.resolution)
            .then(|| (z * self.resolution + x) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(weights: [f32; 4]) -> f32 {
        weights.iter().sum()
    }

    #[test]
    fn test_new_map_is_base_channel() {
        let map = SplatMap::new(4);
        assert_eq!(map.weights(3, 3), Some([1.0, 0.0, 0.0, 0.0]));
        assert_eq!(map.weights(4, 0), None);
    }

    #[test]
    fn test_paint_keeps_weights_normalized() {
        let mut map = SplatMap::new(4);
        assert!(map.paint(1, 2, SplatChannel::G, 0.5));
        assert!(map.paint(1, 2, SplatChannel::B, 0.25));

        let weights = map.weights(1, 2).unwrap();
        assert!((sum(weights) - 1.0).abs() < 1e-6);
        assert!(map.weight(1, 2, SplatChannel::G).unwrap() > 0.0);
        assert!(map.weight(1, 2, SplatChannel::B).unwrap() > 0.0);
    }

    #[test]
    fn test_erasing_everything_falls_back_to_r() {
        let mut map = SplatMap::new(2);
        map.paint(0, 0, SplatChannel::R, -1.0);
        assert_eq!(map.weights(0, 0), Some([1.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_paint_out_of_range() {
        let mut map = SplatMap::new(2);
        assert!(!map.paint(2, 0, SplatChannel::A, 1.0));
    }
}

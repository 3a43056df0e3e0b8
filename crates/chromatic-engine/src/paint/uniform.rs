//! Fixed-size GPU block for hosts that shade gradients themselves.

use bytemuck::{Pod, Zeroable};

use super::{ColorStop, GradientDescriptor, GradientGeometry, SpreadMode};

/// Stops that fit into one [`GradientUniform`]. Longer gradients are resampled.
pub const MAX_UNIFORM_STOPS: usize = 8;

pub const KIND_LINEAR: u32 = 0;
pub const KIND_RADIAL: u32 = 1;
pub const KIND_SWEEP: u32 = 2;

/// std140-compatible gradient block.
///
/// Layout:
/// - `colors`: premultiplied RGBA per stop
/// - `offsets`: stop positions, four per vec4 (`offsets[i / 4][i % 4]`)
/// - `geometry`: linear `[begin.x, begin.y, end.x, end.y]`,
///   radial `[center.x, center.y, radius, 0]`,
///   sweep `[center.x, center.y, start_angle, end_angle]`, all in anchor space
/// - `params`: `[kind, stop_count, spread, 0]`
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientUniform {
    pub colors: [[f32; 4]; MAX_UNIFORM_STOPS],
    pub offsets: [[f32; 4]; MAX_UNIFORM_STOPS / 4],
    pub geometry: [f32; 4],
    pub params: [u32; 4],
}

impl GradientUniform {
    pub fn from_descriptor(descriptor: &GradientDescriptor) -> Self {
        let mut stops = descriptor.sorted_stops();

        if stops.len() > MAX_UNIFORM_STOPS {
            log::debug!(
                "gradient has {} stops; resampling to {MAX_UNIFORM_STOPS} for the uniform block",
                stops.len()
            );
            let last = (MAX_UNIFORM_STOPS - 1) as f32;
            let (lo, hi) = (stops[0].t, stops[stops.len() - 1].t);
            stops = (0..MAX_UNIFORM_STOPS)
                .map(|i| {
                    let t = lo + (hi - lo) * i as f32 / last;
                    ColorStop::new(t, descriptor.color_at_position(t))
                })
                .collect();
        }

        let mut block = Self::zeroed();
        for (i, stop) in stops.iter().enumerate() {
            block.colors[i] = stop.color.to_premul_f32();
            block.offsets[i / 4][i % 4] = stop.t;
        }

        let (kind, geometry) = match descriptor.geometry {
            GradientGeometry::Linear { begin, end } => {
                (KIND_LINEAR, [begin.x, begin.y, end.x, end.y])
            }
            GradientGeometry::Radial { center, radius } => {
                (KIND_RADIAL, [center.x, center.y, radius, 0.0])
            }
            GradientGeometry::Sweep {
                center,
                start_angle,
                end_angle,
            } => (KIND_SWEEP, [center.x, center.y, start_angle, end_angle]),
        };
        block.geometry = geometry;
        block.params = [
            kind,
            stops.len() as u32,
            spread_code(descriptor.spread),
            0,
        ];
        block
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn spread_code(spread: SpreadMode) -> u32 {
    match spread {
        SpreadMode::Pad => 0,
        SpreadMode::Repeat => 1,
        SpreadMode::Reflect => 2,
    }
}

//! Circuit-board decoration generator (stateless).
//!
//! Every shape below is recomputed from scratch each render pass as a
//! pure function of the view context and a seed; nothing survives
//! between frames except the array index a renderer may use as a key.
//! All numeric constants are visual tuning, not contract.

use std::f32::consts::PI;

use vitae_core::{SectionTheme, ViewContext};

use crate::chars::{NODE_CHARS, TRAIL_CHAR};
use crate::color::fade;
use crate::raster::Raster;

/// Terminal cells are roughly twice as tall as wide; vertical extents
/// are scaled by this so radial motifs read as circles.
const ASPECT: f32 = 0.5;

const NUM_TRACES: usize = 24;
const SEGMENTS_PER_TRACE: usize = 8;
const NUM_RINGS: usize = 4;
const NUM_SCATTER: usize = 40;
const NUM_FLOWS: usize = 12;
const TRAIL_LEN: usize = 5;

/// One curved segment of a radial trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSegment {
    pub x1: f32,
    pub y1: f32,
    /// Wobbled midpoint control.
    pub cx: f32,
    pub cy: f32,
    pub x2: f32,
    pub y2: f32,
    pub opacity: f32,
    pub weight: f32,
}

/// A connection node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitNode {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

/// One point of a data-flow trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

/// A pulse sweeping outward along a spoke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowPoint {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub trail: [TrailPoint; TRAIL_LEN],
}

/// Decorative component glyph kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Chip,
    Inductor,
    Memory,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentGlyph {
    pub x: f32,
    pub y: f32,
    pub kind: ComponentKind,
    pub opacity: f32,
}

/// The pulsing central processor block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Processor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub pulse: f32,
}

/// Everything the circuit renderer draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitFrame {
    pub traces: Vec<TraceSegment>,
    pub nodes: Vec<CircuitNode>,
    pub flows: Vec<FlowPoint>,
    pub glyphs: Vec<ComponentGlyph>,
    pub processor: Processor,
    pub pointer_ring: Option<(f32, f32)>,
}

/// Progress of flow `k`: a periodic sawtooth in `[0, 1)`.
pub fn flow_progress(time_s: f32, k: usize) -> f32 {
    ((time_s * 0.5 + k as f32 * 0.2) % 2.0) / 2.0
}

/// Deterministic hash of (seed, n) into `[0, 1)`.
fn hash01(seed: u64, n: u64) -> f32 {
    let mut x = seed
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(n.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    x ^= x >> 31;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 29;
    (x >> 40) as f32 / (1u64 << 24) as f32
}

/// Generate one frame of circuit decoration.
///
/// Pure: identical `(view, seed)` inputs yield identical output.
pub fn generate(view: &ViewContext, seed: u64) -> CircuitFrame {
    let w = view.width as f32;
    let h = view.height as f32;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let time = view.time_s();
    // Scrolling slowly rotates the whole motif.
    let rotation = view.scroll as f32 * 0.01;
    // Largest x-radius that keeps the motif inside the viewport.
    let reach = (w / 2.0).min(h / 2.0 / ASPECT);

    CircuitFrame {
        traces: generate_traces(cx, cy, reach, time, rotation),
        nodes: generate_nodes(w, h, cx, cy, reach, time, seed),
        flows: generate_flows(cx, cy, reach, time, rotation),
        glyphs: generate_glyphs(cx, cy, reach, time),
        processor: Processor {
            x: cx,
            y: cy,
            width: (reach * 0.26).max(6.0),
            height: (reach * 0.26 * ASPECT).max(3.0),
            pulse: 0.8 + (time * 2.0).sin() * 0.2,
        },
        pointer_ring: view.pointer.map(|(px, py)| (px as f32, py as f32)),
    }
}

/// Radial traces: gapped segments along each spoke with a time-wobbled
/// midpoint.
fn generate_traces(cx: f32, cy: f32, reach: f32, time: f32, rotation: f32) -> Vec<TraceSegment> {
    let mut traces = Vec::new();
    let length = reach * 0.92;
    let inner = reach * 0.18;

    for i in 0..NUM_TRACES {
        let angle = i as f32 / NUM_TRACES as f32 * 2.0 * PI + rotation;
        let (dir_x, dir_y) = (angle.cos(), angle.sin() * ASPECT);

        for j in 0..SEGMENTS_PER_TRACE {
            let start_dist = j as f32 * length / SEGMENTS_PER_TRACE as f32 + inner;
            let end_dist = start_dist + length / 12.0;
            if end_dist > length {
                continue;
            }

            let (x1, y1) = (cx + dir_x * start_dist, cy + dir_y * start_dist);
            let (x2, y2) = (cx + dir_x * end_dist, cy + dir_y * end_dist);
            traces.push(TraceSegment {
                x1,
                y1,
                cx: (x1 + x2) / 2.0 + (time + i as f32 * 0.5).sin() * 1.5,
                cy: (y1 + y2) / 2.0 + (time + i as f32 * 0.3).cos() * 0.75,
                x2,
                y2,
                opacity: 0.6 + (time * 1.5 + i as f32 * 0.2).sin() * 0.3,
                weight: 1.5 + (time + i as f32).sin() * 0.5,
            });
        }
    }
    traces
}

/// Ring nodes culled to the viewport, plus seeded scattered nodes.
fn generate_nodes(
    w: f32,
    h: f32,
    cx: f32,
    cy: f32,
    reach: f32,
    time: f32,
    seed: u64,
) -> Vec<CircuitNode> {
    let mut nodes = Vec::new();
    let ring_gap = reach / (NUM_RINGS as f32 + 0.5);

    for ring in 1..=NUM_RINGS {
        let radius = ring as f32 * ring_gap;
        let count = ring * 8;
        for i in 0..count {
            let angle = i as f32 / count as f32 * 2.0 * PI;
            let x = cx + angle.cos() * radius;
            let y = cy + angle.sin() * radius * ASPECT;
            if x > 0.0 && x < w && y > 0.0 && y < h {
                nodes.push(CircuitNode {
                    x,
                    y,
                    radius: 2.0 + (time * 2.0 + i as f32 * 0.1).sin(),
                    opacity: 0.7 + (time * 1.5 + i as f32 * 0.2).sin() * 0.3,
                });
            }
        }
    }

    for i in 0..NUM_SCATTER as u64 {
        nodes.push(CircuitNode {
            x: hash01(seed, i * 2) * w,
            y: hash01(seed, i * 2 + 1) * h,
            radius: 1.0 + hash01(seed, i * 2 + 7) * 2.0,
            opacity: 0.4 + (time + i as f32 * 0.3).sin() * 0.2,
        });
    }
    nodes
}

/// Data pulses sweeping outward, each with a fading five-point trail.
fn generate_flows(cx: f32, cy: f32, reach: f32, time: f32, rotation: f32) -> Vec<FlowPoint> {
    (0..NUM_FLOWS)
        .map(|k| {
            let angle = k as f32 / NUM_FLOWS as f32 * 2.0 * PI + rotation;
            let (dir_x, dir_y) = (angle.cos(), angle.sin() * ASPECT);
            let progress = flow_progress(time, k);
            let swell = (progress * PI).sin();
            let distance = progress * reach;

            let trail = std::array::from_fn(|i| {
                let trail_progress = (progress - i as f32 * 0.05).max(0.0);
                let trail_distance = trail_progress * reach;
                TrailPoint {
                    x: cx + dir_x * trail_distance,
                    y: cy + dir_y * trail_distance,
                    size: (3.0 + (trail_progress * PI).sin() * 2.0) * (1.0 - i as f32 * 0.15),
                    opacity: swell * 0.3 * (1.0 - i as f32 * 0.2),
                }
            });

            FlowPoint {
                x: cx + dir_x * distance,
                y: cy + dir_y * distance,
                size: 3.0 + swell * 2.0,
                opacity: swell * 0.8,
                trail,
            }
        })
        .collect()
}

/// Fixed component glyphs placed around the processor.
fn generate_glyphs(cx: f32, cy: f32, reach: f32, time: f32) -> Vec<ComponentGlyph> {
    let dx = reach * 0.55;
    let dy = reach * 0.55 * ASPECT;
    let positions = [
        (cx - dx, cy - dy, ComponentKind::Resistor),
        (cx + dx, cy - dy, ComponentKind::Capacitor),
        (cx - dx, cy + dy, ComponentKind::Chip),
        (cx + dx, cy + dy, ComponentKind::Inductor),
        (cx, cy - dy * 1.8, ComponentKind::Memory),
        (cx, cy + dy * 1.8, ComponentKind::Io),
    ];

    positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y, kind))| ComponentGlyph {
            x,
            y,
            kind,
            opacity: 0.6 + (time * 0.8 + i as f32 * 0.5).sin() * 0.2,
        })
        .collect()
}

/// Stamp a generated frame onto the raster.
pub fn render(frame: &CircuitFrame, raster: &mut Raster, theme: &SectionTheme) {
    // Faint grid dust, bottom layer.
    let (w, h) = (raster.width(), raster.height());
    for y in (2..h).step_by(4) {
        for x in (4..w).step_by(8) {
            raster.set(x as f32, y as f32, '·', fade(theme.accent, 0.35));
        }
    }

    for trace in &frame.traces {
        render_trace(trace, raster, theme);
    }

    for node in &frame.nodes {
        let ch = if node.radius > 2.4 {
            NODE_CHARS[2]
        } else if node.radius > 1.4 {
            NODE_CHARS[1]
        } else {
            NODE_CHARS[0]
        };
        raster.set(node.x, node.y, ch, fade(theme.secondary, node.opacity));
    }

    for flow in &frame.flows {
        for point in &flow.trail {
            raster.set(point.x, point.y, TRAIL_CHAR, fade(theme.accent, point.opacity * 2.0));
        }
        raster.set(flow.x, flow.y, '●', fade(theme.primary, flow.opacity));
    }

    for glyph in &frame.glyphs {
        render_glyph(glyph, raster, theme);
    }

    render_processor(&frame.processor, raster, theme);

    if let Some((px, py)) = frame.pointer_ring {
        render_pointer_ring(px, py, raster, theme);
    }
}

/// Draw one trace segment as a sampled quadratic curve.
fn render_trace(trace: &TraceSegment, raster: &mut Raster, theme: &SectionTheme) {
    let color = fade(theme.primary, trace.opacity * (trace.weight / 2.0).min(1.0));
    raster.line(trace.x1, trace.y1, trace.cx, trace.cy, color);
    raster.line(trace.cx, trace.cy, trace.x2, trace.y2, color);
}

fn render_glyph(glyph: &ComponentGlyph, raster: &mut Raster, theme: &SectionTheme) {
    let color = fade(theme.secondary, glyph.opacity);
    match glyph.kind {
        ComponentKind::Resistor => raster.text_centered(glyph.x, glyph.y, "─[══]─", color),
        ComponentKind::Capacitor => raster.text_centered(glyph.x, glyph.y, "─┤├─", color),
        ComponentKind::Chip => {
            raster.text_centered(glyph.x, glyph.y - 1.0, "┌──┐", color);
            raster.text_centered(glyph.x, glyph.y, "│▪▪│", color);
            raster.text_centered(glyph.x, glyph.y + 1.0, "└──┘", color);
        }
        ComponentKind::Inductor => raster.text_centered(glyph.x, glyph.y, "─∿∿∿─", color),
        ComponentKind::Memory => {
            raster.text_centered(glyph.x, glyph.y - 1.0, "┌────┐", color);
            raster.text_centered(glyph.x, glyph.y, "│≡≡≡≡│", color);
            raster.text_centered(glyph.x, glyph.y + 1.0, "└────┘", color);
        }
        ComponentKind::Io => raster.text_centered(glyph.x, glyph.y, "◈", color),
    }
}

/// Outline, pin dots, and pulsing core of the central processor.
fn render_processor(processor: &Processor, raster: &mut Raster, theme: &SectionTheme) {
    let half_w = processor.width / 2.0;
    let half_h = processor.height / 2.0;
    let (left, right) = (processor.x - half_w, processor.x + half_w);
    let (top, bottom) = (processor.y - half_h, processor.y + half_h);
    let outline = fade(theme.primary, 0.9);

    raster.line(left, top, right, top, outline);
    raster.line(left, bottom, right, bottom, outline);
    raster.line(left, top, left, bottom, outline);
    raster.line(right, top, right, bottom, outline);
    raster.set(left, top, '┌', outline);
    raster.set(right, top, '┐', outline);
    raster.set(left, bottom, '└', outline);
    raster.set(right, bottom, '┘', outline);

    // Four pin dots per side.
    let pin = fade(theme.secondary, 0.8);
    for i in 1..=4 {
        let t = i as f32 / 5.0;
        let x = left + processor.width * t;
        let y = top + processor.height * t;
        raster.set(x, top - 1.0, '·', pin);
        raster.set(x, bottom + 1.0, '·', pin);
        raster.set(left - 1.0, y, '·', pin);
        raster.set(right + 1.0, y, '·', pin);
    }

    // Pulsing core.
    let core = fade(theme.primary, 0.6 * processor.pulse);
    for dy in -1..=1 {
        raster.text_centered(processor.x, processor.y + dy as f32, "▓▓▓▓", core);
    }
}

/// Two concentric highlight rings around the pointer.
fn render_pointer_ring(px: f32, py: f32, raster: &mut Raster, theme: &SectionTheme) {
    for (radius, color) in [
        (9.0, fade(theme.primary, 0.4)),
        (4.5, fade(theme.secondary, 0.6)),
    ] {
        let samples = (radius * 6.0) as usize;
        for s in 0..samples {
            let angle = s as f32 / samples as f32 * 2.0 * PI;
            raster.set(
                px + angle.cos() * radius,
                py + angle.sin() * radius * ASPECT,
                '·',
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use vitae_core::{AnimationSpeed, Section};

    use super::*;

    fn view() -> ViewContext {
        ViewContext {
            width: 120,
            height: 40,
            elapsed_ms: 12_345,
            scroll: 30,
            section: Section::Skills,
            pointer: Some((60, 20)),
            speed: AnimationSpeed::Medium,
        }
    }

    #[test]
    fn test_generate_is_pure() {
        let v = view();
        assert_eq!(generate(&v, 7), generate(&v, 7));
    }

    #[test]
    fn test_seed_only_changes_scattered_nodes() {
        let v = view();
        let a = generate(&v, 1);
        let b = generate(&v, 2);
        assert_eq!(a.traces, b.traces);
        assert_eq!(a.flows, b.flows);
        assert_ne!(a.nodes, b.nodes);
    }

    #[test]
    fn test_flow_progress_is_a_bounded_sawtooth() {
        for k in 0..NUM_FLOWS {
            for t in [0.0_f32, 0.3, 1.9, 57.25, 3600.0] {
                let p = flow_progress(t, k);
                assert!((0.0..1.0).contains(&p), "progress {p} for t={t} k={k}");
            }
        }
    }

    #[test]
    fn test_trail_opacity_fades_with_index() {
        let v = view();
        for flow in generate(&v, 0).flows {
            for pair in flow.trail.windows(2) {
                assert!(pair[1].opacity <= pair[0].opacity);
            }
        }
    }

    #[test]
    fn test_ring_nodes_stay_inside_the_viewport() {
        let v = view();
        let frame = generate(&v, 3);
        // Scattered nodes land anywhere in the viewport too, so the
        // whole node set must respect the bounds.
        for node in &frame.nodes {
            assert!(node.x >= 0.0 && node.x <= v.width as f32);
            assert!(node.y >= 0.0 && node.y <= v.height as f32);
        }
    }

    #[test]
    fn test_processor_sits_at_the_center() {
        let v = view();
        let frame = generate(&v, 0);
        assert_eq!(frame.processor.x, v.width as f32 / 2.0);
        assert_eq!(frame.processor.y, v.height as f32 / 2.0);
        assert!(frame.processor.pulse >= 0.6 && frame.processor.pulse <= 1.0);
    }

    #[test]
    fn test_pointer_ring_follows_the_pointer() {
        let mut v = view();
        assert_eq!(generate(&v, 0).pointer_ring, Some((60.0, 20.0)));
        v.pointer = None;
        assert_eq!(generate(&v, 0).pointer_ring, None);
    }

    #[test]
    fn test_render_smoke() {
        let v = view();
        let frame = generate(&v, 9);
        let mut raster = Raster::new(v.width, v.height);
        render(&frame, &mut raster, &v.section.theme());
        // The processor core must land at the center cell.
        assert!(raster.get(60, 20).is_some());
    }
}

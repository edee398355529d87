//! Turns a skeleton into the ordered draw list the host renders.

use crate::color::{self, BODY_ALPHA, FISH_RGB, OTHER_ALPHA};
use crate::skeleton::{Fin, Segment, Skeleton, Triangle};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum PathCommand {
    LineTo(Point2<f64>),
    QuadTo {
        control: Point2<f64>,
        end: Point2<f64>,
    },
}

/// A filled shape. Colors are 0xRRGGBBAA.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle {
        center: Point2<f64>,
        radius: f64,
        color: u32,
    },
    Path {
        start: Point2<f64>,
        commands: Vec<PathCommand>,
        closed: bool,
        color: u32,
    },
}

impl Primitive {
    pub fn color(&self) -> u32 {
        match self {
            Primitive::Circle { color, .. } | Primitive::Path { color, .. } => *color,
        }
    }

    /// Every point the primitive references, controls included.
    pub fn points(&self) -> Vec<Point2<f64>> {
        match self {
            Primitive::Circle { center, .. } => vec![*center],
            Primitive::Path {
                start, commands, ..
            } => {
                let mut points = vec![*start];
                for command in commands {
                    match command {
                        PathCommand::LineTo(p) => points.push(*p),
                        PathCommand::QuadTo { control, end } => {
                            points.push(*control);
                            points.push(*end);
                        }
                    }
                }
                points
            }
        }
    }
}

/// Draw order: head, fins, tail-ward segments, tail, then the body on top.
pub fn emit(skeleton: &Skeleton) -> Vec<Primitive> {
    let other = color::with_alpha(FISH_RGB, OTHER_ALPHA);
    let mut primitives = Vec::with_capacity(12);

    primitives.push(Primitive::Circle {
        center: skeleton.head,
        radius: skeleton.head_radius,
        color: other,
    });
    for fin in skeleton.fins.iter() {
        primitives.push(emit_fin(fin, other));
    }
    for segment in skeleton.segments.iter() {
        emit_segment(segment, other, &mut primitives);
    }
    for triangle in skeleton.tail.iter() {
        primitives.push(emit_triangle(triangle, other));
    }

    let body = &skeleton.body;
    primitives.push(Primitive::Path {
        start: body.upper_left,
        commands: vec![
            PathCommand::QuadTo {
                control: body.control_left,
                end: body.lower_left,
            },
            PathCommand::LineTo(body.lower_right),
            PathCommand::QuadTo {
                control: body.control_right,
                end: body.upper_right,
            },
        ],
        closed: true,
        color: color::with_alpha(FISH_RGB, BODY_ALPHA),
    });

    primitives
}

fn emit_fin(fin: &Fin, color: u32) -> Primitive {
    Primitive::Path {
        start: fin.base,
        commands: vec![PathCommand::QuadTo {
            control: fin.control,
            end: fin.tip,
        }],
        closed: true,
        color,
    }
}

fn emit_segment(segment: &Segment, color: u32, primitives: &mut Vec<Primitive>) {
    if segment.draws_big_circle {
        primitives.push(Primitive::Circle {
            center: segment.big_center,
            radius: segment.big_radius,
            color,
        });
    }
    primitives.push(Primitive::Circle {
        center: segment.small_center,
        radius: segment.small_radius,
        color,
    });
    let [upper_left, upper_right, lower_right, lower_left] = segment.corners;
    primitives.push(Primitive::Path {
        start: upper_left,
        commands: vec![
            PathCommand::LineTo(upper_right),
            PathCommand::LineTo(lower_right),
            PathCommand::LineTo(lower_left),
        ],
        closed: true,
        color,
    });
}

fn emit_triangle(triangle: &Triangle, color: u32) -> Primitive {
    Primitive::Path {
        start: triangle.apex,
        commands: vec![
            PathCommand::LineTo(triangle.left),
            PathCommand::LineTo(triangle.right),
        ],
        closed: true,
        color,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fish::{local_center, BOX_SIZE, HEAD_RADIUS, SMALL_CIRCLE_RADIUS};
    use crate::pose::Pose;
    use crate::skeleton;
    use test_log::test;

    #[test]
    fn test_order() {
        let skeleton = skeleton::build(&Pose::default(), 0.0, local_center());
        let primitives = emit(&skeleton);
        assert_eq!(primitives.len(), 11);

        match &primitives[0] {
            Primitive::Circle { center, radius, .. } => {
                assert_eq!(*center, skeleton.head);
                assert_eq!(*radius, HEAD_RADIUS);
            }
            p => panic!("expected head circle, got {:?}", p),
        }
        let circles: Vec<f64> = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 4);
        assert_eq!(*circles.last().unwrap(), SMALL_CIRCLE_RADIUS);

        let body = primitives.last().unwrap();
        assert_eq!(body.color() & 0xff, BODY_ALPHA as u32);
        assert!(primitives[..10]
            .iter()
            .all(|p| p.color() & 0xff == OTHER_ALPHA as u32));
    }

    #[test]
    fn test_fits_box_at_rest() {
        for phase in (0..720).step_by(15) {
            let skeleton = skeleton::build(&Pose::default(), phase as f64, local_center());
            for primitive in emit(&skeleton) {
                for p in primitive.points() {
                    assert!(p.x >= 0.0 && p.x <= BOX_SIZE, "{:?} at phase {}", p, phase);
                    assert!(p.y >= 0.0 && p.y <= BOX_SIZE, "{:?} at phase {}", p, phase);
                }
            }
        }
    }

    #[test]
    fn test_serialized_kind() {
        let skeleton = skeleton::build(&Pose::default(), 0.0, local_center());
        let json = serde_json::to_value(&emit(&skeleton)).unwrap();
        assert_eq!(json[0]["kind"], "circle");
        assert_eq!(json[1]["kind"], "path");
        assert_eq!(json[1]["closed"], true);
    }

    #[test]
    fn test_every_path_closed() {
        let skeleton = skeleton::build(&Pose::default(), 90.0, local_center());
        for primitive in emit(&skeleton) {
            if let Primitive::Path { closed, .. } = primitive {
                assert!(closed);
            }
        }
    }
}

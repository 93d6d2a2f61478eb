// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![cfg(feature = "serde")]
use std::collections::BTreeMap;

use serde_value::Value;

use lumen_geom::{Plane, Projection, Ray};
use lumen_math::Vec3f;

fn floats(values: &[f32]) -> Value {
    Value::Seq(values.iter().copied().map(Value::F32).collect())
}

fn as_map(value: Result<Value, serde_value::SerializerError>) -> BTreeMap<Value, Value> {
    match value {
        Ok(Value::Map(map)) => map,
        other => unreachable!("expected a struct map, got {other:?}"),
    }
}

fn field<'a>(map: &'a BTreeMap<Value, Value>, name: &str) -> Option<&'a Value> {
    map.get(&Value::String(name.to_owned()))
}

#[test]
fn plane_writes_normal_and_point() {
    let plane = Plane::new(Vec3f::new(3.0, 2.0, 0.0), Vec3f::UNIT_Y);
    let map = as_map(serde_value::to_value(plane));
    assert_eq!(field(&map, "normal"), Some(&floats(&[0.0, 1.0, 0.0])));
    assert_eq!(field(&map, "point"), Some(&floats(&[3.0, 2.0, 0.0])));
    let back: Result<Plane<f32>, _> = Value::Map(map).deserialize_into();
    assert_eq!(back.ok(), Some(plane));
}

#[test]
fn ray_writes_origin_and_direction() {
    let ray = Ray::new(Vec3f::new(1.0, 2.0, 3.0), Vec3f::UNIT_Z);
    let map = as_map(serde_value::to_value(ray));
    assert_eq!(field(&map, "origin"), Some(&floats(&[1.0, 2.0, 3.0])));
    assert_eq!(field(&map, "dir"), Some(&floats(&[0.0, 0.0, 1.0])));
    let back: Result<Ray<f32>, _> = Value::Map(map).deserialize_into();
    assert_eq!(back.ok(), Some(ray));
}

#[test]
fn projection_round_trips() {
    let projection = Projection::new(60.0_f32, 1.5, 0.1, 500.0);
    let map = as_map(serde_value::to_value(projection));
    assert_eq!(field(&map, "fov_y_degrees"), Some(&Value::F32(60.0)));
    assert_eq!(field(&map, "aspect"), Some(&Value::F32(1.5)));
    let back: Result<Projection<f32>, _> = Value::Map(map).deserialize_into();
    assert_eq!(back.ok(), Some(projection));
}

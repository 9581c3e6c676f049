use nalgebra::{Point3, Vector3};

pub fn length(v: &Vector3<f64>) -> f64 {
    v.norm()
}

pub fn dot(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}

// Right-handed cross product. Zero inputs yield the zero vector; callers that
// normalize the result must check its length first.
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub fn distance(p: &Point3<f64>, q: &Point3<f64>) -> f64 {
    (p - q).norm()
}

// Arithmetic mean of the given points, or `None` for an empty input.
pub fn centroid<'a, I>(points: I) -> Option<Point3<f64>>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for point in points {
        sum += point.coords;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(Point3::from(sum / count as f64))
    }
}

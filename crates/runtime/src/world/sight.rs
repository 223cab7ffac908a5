use game_core::Position;

/// Bresenham line from `from` to `to`, both endpoints included.
pub(crate) fn line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut error = dx + dy;
    let mut current = from;
    loop {
        points.push(current);
        if current == to {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
    points
}

/// True when no cell strictly between the endpoints blocks sight.
pub(crate) fn has_line_of_sight<F>(from: Position, to: Position, blocks: F) -> bool
where
    F: Fn(Position) -> bool,
{
    let points = line(from, to);
    points
        .iter()
        .skip(1)
        .take(points.len().saturating_sub(2))
        .all(|&point| !blocks(point))
}

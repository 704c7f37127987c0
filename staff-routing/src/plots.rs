//! Draws routing solution on a chart.

#[cfg(test)]
#[path = "../tests/unit/plots_test.rs"]
mod plots_test;

use crate::data::{GeoPoint, RoutingData};
use crate::solver::RoutingSolution;
use crate::writer::format_km;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::iter::once;
use std::ops::Range;
use std::path::Path;
use vrp_core::prelude::GenericError;
use vrp_core::utils::GenericResult;

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

const PLOT_SIZE: (u32, u32) = (1500, 1500);
const ROUTE_COLORS: [RGBColor; 6] = [BLUE, GREEN, RED, CYAN, MAGENTA, YELLOW];
/// Arrow head length as a fraction of the plot side.
const ARROW_SIZE: f64 = 0.015;

/// Draws routes into svg file.
pub fn draw_routes(path: &Path, data: &RoutingData, solution: &RoutingSolution) -> GenericResult<()> {
    let area = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();

    draw_on_area(&area, data, solution)
        .and_then(|_| Ok(area.present()?))
        .map_err(|err| GenericError::from(format!("cannot draw routes into '{}': {err}", path.display())))
}

/// Draws routes, vehicle starts and the depot on the given drawing area.
pub fn draw_on_area<B: DrawingBackend>(
    area: &DrawingArea<B, Shift>,
    data: &RoutingData,
    solution: &RoutingSolution,
) -> DrawResult<()>
where
    B::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let (x_range, y_range) = get_bounds(data.locations.as_slice());
    let spans = (x_range.end - x_range.start, y_range.end - y_range.start);
    let mut chart = ChartBuilder::on(area)
        .caption("Vehicle Routes", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().x_desc("Longitude").y_desc("Latitude").draw()?;

    let to_coord = |idx: usize| {
        let location = &data.locations[idx];
        (location.longitude, location.latitude)
    };

    for route in solution.routes.iter() {
        let color = ROUTE_COLORS[route.vehicle % ROUTE_COLORS.len()];

        chart.draw_series(LineSeries::new(route.stops.iter().map(|&stop| to_coord(stop)), color.stroke_width(2)))?;

        chart.draw_series(
            route
                .legs(data)
                .filter_map(|(from, to, _)| get_arrow_head(to_coord(from), to_coord(to), spans))
                .map(|head| Polygon::new(head, color.filled())),
        )?;

        chart.draw_series(route.stops.iter().map(|&stop| {
            EmptyElement::at(to_coord(stop))
                + Circle::new((0, 0), 4, color.filled())
                + Text::new(stop.to_string(), (-14, -14), ("sans-serif", 12).into_font())
        }))?;

        chart.draw_series(route.legs(data).map(|(from, to, distance)| {
            let ((x1, y1), (x2, y2)) = (to_coord(from), to_coord(to));
            let style = ("sans-serif", 11).into_font().color(&color);
            Text::new(format_km(distance), ((x1 + x2) / 2., (y1 + y2) / 2.), style)
        }))?;
    }

    chart.draw_series(data.vehicle_starts.iter().enumerate().map(|(vehicle, &start)| {
        let label = format!("V{vehicle} ({})", data.vehicle_capacities[vehicle]);
        EmptyElement::at(to_coord(start))
            + Circle::new((0, 0), 7, BLACK.filled())
            + Text::new(label, (-60, -20), ("sans-serif", 12).into_font())
    }))?;

    chart.draw_series(once(
        EmptyElement::at(to_coord(data.depot))
            + Rectangle::new([(-8, -8), (8, 8)], RED.filled())
            + Text::new("Depot", (-40, -24), ("sans-serif", 12).into_font()),
    ))?;

    Ok(())
}

/// Returns a triangle pointing at the end of the leg. Its size is the same on screen regardless of
/// axis spans. Returns `None` for a leg of zero length.
fn get_arrow_head(from: (f64, f64), to: (f64, f64), spans: (f64, f64)) -> Option<Vec<(f64, f64)>> {
    let (x_span, y_span) = spans;
    let (dx, dy) = ((to.0 - from.0) / x_span, (to.1 - from.1) / y_span);
    let length = (dx * dx + dy * dy).sqrt();

    if !length.is_normal() {
        return None;
    }

    let size = ARROW_SIZE.min(length / 2.);
    let (ux, uy) = (dx / length * size, dy / length * size);
    let to_data = |x: f64, y: f64| (to.0 + x * x_span, to.1 + y * y_span);

    Some(vec![to, to_data(-ux - uy / 2., -uy + ux / 2.), to_data(-ux + uy / 2., -uy - ux / 2.)])
}

fn get_bounds(locations: &[GeoPoint]) -> (Range<f64>, Range<f64>) {
    let (min_x, max_x, min_y, max_y) = locations.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), location| {
            (
                min_x.min(location.longitude),
                max_x.max(location.longitude),
                min_y.min(location.latitude),
                max_y.max(location.latitude),
            )
        },
    );

    if locations.is_empty() {
        return (0. ..1., 0. ..1.);
    }

    let pad = |min: f64, max: f64| {
        let margin = ((max - min) * 0.05).max(0.01);
        (min - margin)..(max + margin)
    };

    (pad(min_x, max_x), pad(min_y, max_y))
}

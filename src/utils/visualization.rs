//! Plotting utilities for georouter
//!
//! A thin gnuplot wrapper that draws a planned route, its endpoints, and
//! the obstacle set on longitude/latitude axes. The planning core knows
//! nothing about this module; it is the display collaborator the finished
//! path is handed to.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{GeoPath, GeoPoint, ObstacleSet, RouterError, RouterResult};

/// Route plot on longitude/latitude axes
pub struct RoutePlot {
    figure: Figure,
    title: String,
}

impl RoutePlot {
    pub fn new(title: &str) -> Self {
        Self {
            figure: Figure::new(),
            title: title.to_string(),
        }
    }

    /// Draw a route scene, replacing any previously drawn axes.
    pub fn draw(&mut self, start: GeoPoint, end: GeoPoint, obstacles: &ObstacleSet, path: &GeoPath) {
        let (obs_lat, obs_lng): (Vec<f64>, Vec<f64>) =
            obstacles.points().map(|p| (p.lat, p.lng)).unzip();

        self.figure.clear_axes();
        self.figure
            .axes2d()
            .points(
                &obs_lng,
                &obs_lat,
                &[Caption("Obstacles"), Color("red"), PointSymbol('O'), PointSize(1.5)],
            )
            .lines(
                &path.lng_coords(),
                &path.lat_coords(),
                &[Caption("Route"), Color("blue"), LineWidth(2.0)],
            )
            .points(&[start.lng], &[start.lat], &[Caption("Start"), Color("green")])
            .points(&[end.lng], &[end.lat], &[Caption("End"), Color("black")])
            .set_title(&self.title, &[])
            .set_x_label("Longitude [deg]", &[])
            .set_y_label("Latitude [deg]", &[])
            .set_aspect_ratio(AutoOption::Fix(1.0));
    }

    /// Save the drawn scene to a PNG file.
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> RouterResult<()> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| RouterError::Visualization(format!("{:?}", e)))
    }

    /// Open an interactive gnuplot window.
    pub fn show(&mut self) -> RouterResult<()> {
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| RouterError::Visualization(format!("{:?}", e)))
    }
}

// Grid route planning demo
//
// Plans a route between two points in central Bengaluru, drops an obstacle
// on the straight line, re-plans around it, and saves a plot. An optional
// first argument selects the strategy: "astar" (default) or "dijkstra".

use georouter::{GeoPoint, RoutePlot, RouterResult, RoutingSession, SearchConfig, SearchStrategy};

fn main() -> RouterResult<()> {
    println!("Grid route planning start!!");

    let strategy = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<SearchStrategy>()?,
        None => SearchStrategy::AStar,
    };
    println!("Strategy: {:?}", strategy);

    let mut session = RoutingSession::new(strategy, SearchConfig::default())?;

    let start = GeoPoint::new(12.971, 77.5946);
    let end = GeoPoint::new(13.001, 77.6246);

    let direct = session.route(start, end);
    println!(
        "Direct route: {} points, {:.2} km",
        direct.len(),
        direct.total_km()
    );

    // Obstacle squarely on the straight line between start and end
    session.add_obstacle(GeoPoint::new(12.986, 77.6096));
    let detour = session.route(start, end);
    println!(
        "Detour route: {} points, {:.2} km",
        detour.len(),
        detour.total_km()
    );

    std::fs::create_dir_all("img")?;
    let mut plot = RoutePlot::new("Grid Route Planning");
    plot.draw(start, end, session.obstacles(), &detour);
    plot.save_png("img/route_demo.png", 800, 600)?;
    println!("Plot saved to: img/route_demo.png");

    println!("Grid route planning finish!!");
    Ok(())
}

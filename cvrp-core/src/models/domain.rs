use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Specifies a cost value.
pub type Cost = f64;

/// Specifies a time value.
pub type Timestamp = f64;

/// Specifies a demand value.
pub type Demand = f64;

/// Represents a 2D coordinate in planar (or small scale geographic) units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X (or longitude) coordinate.
    pub x: f64,
    /// Y (or latitude) coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`].
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns straight line distance to another point.
    pub fn distance_to(&self, other: &Point) -> Cost {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Represents a time window within which a service at customer must begin.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    /// Earliest possible time to start the service.
    pub start: Timestamp,
    /// Latest possible time to start the service.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: f64::INFINITY }
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

/// Represents a depot: the place where vehicles start and end their routes.
#[derive(Clone, Debug, PartialEq)]
pub struct Depot {
    /// An optional depot identifier.
    pub id: Option<String>,
    /// A depot location.
    pub location: Point,
}

impl Depot {
    /// Creates a new [`Depot`] without an identifier.
    pub fn new(location: Point) -> Self {
        Self { id: None, location }
    }

    /// Creates a new [`Depot`] with the given identifier.
    pub fn with_id(id: &str, location: Point) -> Self {
        Self { id: Some(id.to_string()), location }
    }

    /// Returns a default depot placed at the origin.
    pub fn origin() -> Self {
        Self::new(Point::default())
    }
}

/// Represents a customer with a demand and an optional delivery time window.
#[derive(Clone, Debug)]
pub struct Customer {
    /// A unique customer identifier compared by its string form.
    pub id: String,
    /// A customer location.
    pub location: Point,
    /// A non-negative demand.
    pub demand: Demand,
    /// A delivery time window, unlimited by default.
    pub time_window: TimeWindow,
    /// A service duration spent at the customer, zero by default.
    pub service_time: Timestamp,
}

impl Customer {
    /// Creates a new [`Customer`] with an unlimited time window and no service time.
    pub fn new(id: &str, location: Point, demand: Demand) -> Self {
        Self { id: id.to_string(), location, demand, time_window: TimeWindow::max(), service_time: 0. }
    }

    /// Sets a delivery time window.
    pub fn with_time_window(mut self, start: Timestamp, end: Timestamp) -> Self {
        self.time_window = TimeWindow::new(start, end);
        self
    }

    /// Sets a service duration.
    pub fn with_service_time(mut self, service_time: Timestamp) -> Self {
        self.service_time = service_time;
        self
    }
}

/// Defines a vehicle routing problem instance. Input data is read only: the solver
/// never mutates it and holds no state across solve invocations.
#[derive(Clone, Debug)]
pub struct Problem {
    /// One or more depots.
    pub depots: Vec<Depot>,
    /// Customers to be served.
    pub customers: Vec<Customer>,
    /// A vehicle capacity shared by all vehicles.
    pub capacity: Demand,
    /// An optional limit of customer stops per route.
    pub max_route_stops: Option<usize>,
}

impl Problem {
    /// Creates a new [`Problem`] with the given depots.
    pub fn new(depots: Vec<Depot>, customers: Vec<Customer>, capacity: Demand) -> Self {
        Self { depots, customers, capacity, max_route_stops: None }
    }

    /// Creates a new single depot [`Problem`] with the depot placed at the origin.
    pub fn at_origin(customers: Vec<Customer>, capacity: Demand) -> Self {
        Self::new(vec![Depot::origin()], customers, capacity)
    }

    /// Sets a limit of customer stops per route.
    pub fn with_max_route_stops(mut self, max_route_stops: usize) -> Self {
        self.max_route_stops = Some(max_route_stops);
        self
    }
}

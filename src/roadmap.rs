//! Road-trip domain: the highway graph, the four cost metrics, and their
//! straight-line heuristics.

use crate::algorithms::euclidean_distance;
use crate::io::LoadError;
use crate::space::{Estimate, Keyed, SearchSpace};
use log::debug;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::str::FromStr;

/// One directed road segment out of a city.
#[derive(Clone, Debug)]
pub struct Segment {
    pub to: usize,
    pub miles: f64,
    pub speed: f64,
    pub highway: String,
}

/// The highway network: interned city names, adjacency lists, and the
/// per-dataset maxima the heuristics scale by.
pub struct RoadMap {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    adjacency: Vec<Vec<Segment>>,
    coords: Vec<Option<(f64, f64)>>,
    max_miles: f64,
    max_speed: f64,
    max_mpg: f64,
}

/// Totals of a walked route, reported independently of the optimized
/// metric.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub segments: usize,
    pub miles: f64,
    pub hours: f64,
    pub gallons: f64,
    /// Visited cities, starting city included.
    pub cities: Vec<usize>,
}

impl RoadMap {
    /// Builds the network from the contents of a segment file and a GPS
    /// file.
    ///
    /// Segment lines are `city_a city_b miles speed highway`; both travel
    /// directions are inserted. GPS lines are `city latitude longitude`.
    /// Lines with the wrong field count are skipped, matching the data
    /// files this format comes from; fields that fail to parse as numbers
    /// are reported as errors against `segments_path`/`gps_path`.
    pub fn parse(
        segments_text: &str,
        segments_path: &Path,
        gps_text: &str,
        gps_path: &Path,
    ) -> Result<Self, LoadError> {
        let mut map = Self {
            names: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            coords: Vec::new(),
            max_miles: 0.0,
            max_speed: 0.0,
            max_mpg: 0.0,
        };

        for (number, line) in segments_text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();

            if fields.is_empty() {
                continue;
            }

            if fields.len() != 5 {
                debug!("skipping malformed segment line {}", number + 1);
                continue;
            }

            let miles = parse_number(fields[2], segments_path, number + 1)?;
            let speed = parse_number(fields[3], segments_path, number + 1)?;
            let a = map.intern(fields[0]);
            let b = map.intern(fields[1]);

            map.adjacency[a].push(Segment {
                to: b,
                miles,
                speed,
                highway: fields[4].to_string(),
            });
            map.adjacency[b].push(Segment {
                to: a,
                miles,
                speed,
                highway: fields[4].to_string(),
            });

            map.max_miles = map.max_miles.max(miles);
            map.max_speed = map.max_speed.max(speed);
            map.max_mpg = map.max_mpg.max(Self::mpg(speed));
        }

        for (number, line) in gps_text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();

            if fields.is_empty() {
                continue;
            }

            if fields.len() != 3 {
                debug!("skipping malformed gps line {}", number + 1);
                continue;
            }

            let latitude = parse_number(fields[1], gps_path, number + 1)?;
            let longitude = parse_number(fields[2], gps_path, number + 1)?;
            let city = map.intern(fields[0]);
            map.coords[city] = Some((latitude, longitude));
        }

        Ok(map)
    }

    /// Reads and parses the two data files.
    pub fn load(segments_path: &Path, gps_path: &Path) -> Result<Self, LoadError> {
        let segments_text = crate::io::read_to_string(segments_path)?;
        let gps_text = crate::io::read_to_string(gps_path)?;

        Self::parse(&segments_text, segments_path, &gps_text, gps_path)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&city) = self.index.get(name) {
            return city;
        }

        let city = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), city);
        self.adjacency.push(Vec::new());
        self.coords.push(None);

        city
    }

    /// Looks a city up by name.
    pub fn city(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name of a city.
    pub fn name(&self, city: usize) -> &str {
        &self.names[city]
    }

    /// Returns the GPS coordinates of a city, if the GPS file had them.
    pub fn coords(&self, city: usize) -> Option<(f64, f64)> {
        self.coords[city]
    }

    /// Miles per gallon at a cruising speed: `8/3 · v · (1 − v/150)⁴`.
    pub fn mpg(speed: f64) -> f64 {
        (1.0 - speed / 150.0).powi(4) * speed * 8.0 / 3.0
    }

    /// Walks a route returned by the engine (a sequence of adjacency
    /// slots) and accumulates every reported measure.
    pub fn itinerary(&self, start: usize, slots: &[usize]) -> Itinerary {
        let mut itinerary = Itinerary {
            segments: slots.len(),
            miles: 0.0,
            hours: 0.0,
            gallons: 0.0,
            cities: vec![start],
        };
        let mut current = start;

        for &slot in slots {
            let segment = &self.adjacency[current][slot];
            itinerary.miles += segment.miles;
            itinerary.hours += segment.miles / segment.speed;
            itinerary.gallons += segment.miles / Self::mpg(segment.speed);
            itinerary.cities.push(segment.to);
            current = segment.to;
        }

        itinerary
    }
}

fn parse_number(field: &str, path: &Path, line: usize) -> Result<f64, LoadError> {
    field.parse().map_err(|_| LoadError::Line {
        path: path.to_path_buf(),
        line,
        message: format!("invalid number {field:?}"),
    })
}

/// Returns whether a city argument looks like `City,_State`.
pub fn well_formed_city_name(name: &str) -> bool {
    name.split(",_").filter(|part| !part.is_empty()).count() == 2
}

/// The quantity a route is optimized for, chosen once at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    Segments,
    Distance,
    Time,
    Mpg,
}

impl FromStr for Metric {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "segments" => Ok(Self::Segments),
            "distance" => Ok(Self::Distance),
            "time" => Ok(Self::Time),
            "mpg" => Ok(Self::Mpg),
            _ => Err(LoadError::Format(format!(
                "unsupported cost function {s:?} (expected segments, distance, time, or mpg)"
            ))),
        }
    }
}

impl Metric {
    fn step_cost(self, segment: &Segment) -> f64 {
        match self {
            Self::Segments => 1.0,
            Self::Distance => segment.miles,
            Self::Time => segment.miles / segment.speed,
            Self::Mpg => segment.miles / RoadMap::mpg(segment.speed),
        }
    }
}

/// One routing question: where from, where to, and by which metric.
pub struct RouteQuery<'a> {
    map: &'a RoadMap,
    start: usize,
    goal: usize,
    metric: Metric,
}

impl<'a> RouteQuery<'a> {
    pub fn new(map: &'a RoadMap, start: usize, goal: usize, metric: Metric) -> Self {
        Self {
            map,
            start,
            goal,
            metric,
        }
    }
}

impl SearchSpace for RouteQuery<'_> {
    type State = usize;
    type Cost = f64;
    /// Adjacency slot taken out of the current city.
    type Label = usize;

    fn initial_state(&self) -> Self::State {
        self.start
    }

    fn successors(
        &self,
        state: &Self::State,
    ) -> impl IntoIterator<Item = (Self::Cost, Self::State, Self::Label)> {
        self.map.adjacency[*state]
            .iter()
            .enumerate()
            .map(|(slot, segment)| (self.metric.step_cost(segment), segment.to, slot))
            .collect::<Vec<_>>()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }
}

impl Estimate for RouteQuery<'_> {
    /// Straight-line distance to the destination, scaled into the metric's
    /// unit by the dataset maximum (longest segment, highest speed, best
    /// mpg). A city missing from the GPS file estimates 0, which keeps the
    /// bound admissible.
    fn estimate(&self, state: &Self::State) -> Self::Cost {
        let (Some(here), Some(there)) = (self.map.coords(*state), self.map.coords(self.goal))
        else {
            return 0.0;
        };
        let straight = euclidean_distance(here, there);

        let scaled = match self.metric {
            Metric::Segments => straight / self.map.max_miles,
            Metric::Distance => straight,
            Metric::Time => straight / self.map.max_speed,
            Metric::Mpg => straight / self.map.max_mpg,
        };

        if scaled.is_finite() {
            scaled
        } else {
            0.0
        }
    }
}

impl Keyed for RouteQuery<'_> {
    type State = usize;
    type Key = usize;

    fn key(&self, state: &Self::State) -> Self::Key {
        *state
    }
}

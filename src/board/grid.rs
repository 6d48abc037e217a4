//! Toroidal grid snapshot.
//!
//! The grid wraps on both axes: stepping off the east edge lands on the west
//! edge and stepping off the north edge lands on the south edge. Every lookup
//! goes through `normalize`, so callers may pass coordinates that have not been
//! wrapped yet.

use super::location::{Direction, Location};
use super::site::{PlayerId, Site};

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("expected {expected} sites for the grid, got {actual}")]
    SiteCountMismatch { expected: usize, actual: usize },
}

/// One turn's view of the whole map, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    sites: Vec<Site>,
}

impl Grid {
    /// Builds a grid from row-major sites.
    pub fn new(width: usize, height: usize, sites: Vec<Site>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if sites.len() != expected {
            return Err(GridError::SiteCountMismatch {
                expected,
                actual: sites.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            sites,
        })
    }

    /// Builds a grid with every cell set to `site`.
    pub fn filled(width: usize, height: usize, site: Site) -> Result<Self, GridError> {
        Self::new(width, height, vec![site; width * height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The longer side of the map. Used as the search horizon and as the
    /// baseline of the distance term when scoring.
    #[inline]
    pub fn map_size(&self) -> usize {
        self.width.max(self.height)
    }

    /// All sites in row-major order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Wraps a location into `[0, width) x [0, height)`.
    #[inline]
    pub fn normalize(&self, loc: Location) -> Location {
        Location::new(loc.x % self.width, loc.y % self.height)
    }

    /// Row-major index of a location after wrapping.
    #[inline]
    pub fn index(&self, loc: Location) -> usize {
        let loc = self.normalize(loc);
        loc.y * self.width + loc.x
    }

    /// Location of a row-major index.
    #[inline]
    pub fn location_of(&self, index: usize) -> Location {
        let index = index % self.sites.len();
        Location::new(index % self.width, index / self.width)
    }

    /// Iterates every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.sites.len()).map(move |i| self.location_of(i))
    }

    /// Replaces the site at a location. Fixture helper; grids decoded from
    /// the wire are never edited.
    #[cfg(test)]
    pub(crate) fn set(&mut self, loc: Location, site: Site) {
        let idx = self.index(loc);
        self.sites[idx] = site;
    }

    /// The location `radius` steps from `loc` in `direction`, wrapped.
    pub fn neighbor_location(&self, loc: Location, direction: Direction, radius: usize) -> Location {
        let loc = self.normalize(loc);
        if radius == 0 || direction == Direction::Hold {
            return loc;
        }
        let (dx, dy) = direction.delta();
        // Reduce the radius first so the signed arithmetic cannot overflow.
        let rx = (radius % self.width) as isize;
        let ry = (radius % self.height) as isize;
        let w = self.width as isize;
        let h = self.height as isize;
        let x = (loc.x as isize + dx * rx).rem_euclid(w);
        let y = (loc.y as isize + dy * ry).rem_euclid(h);
        Location::new(x as usize, y as usize)
    }

    /// The site at `loc`.
    #[inline]
    pub fn site(&self, loc: Location) -> Site {
        self.sites[self.index(loc)]
    }

    /// The site `radius` steps from `loc` in `direction`.
    #[inline]
    pub fn site_at(&self, loc: Location, direction: Direction, radius: usize) -> Site {
        self.site(self.neighbor_location(loc, direction, radius))
    }

    /// Manhattan distance taking the shorter way around on each axis.
    pub fn distance(&self, a: Location, b: Location) -> usize {
        let a = self.normalize(a);
        let b = self.normalize(b);
        let mut dx = a.x.abs_diff(b.x);
        let mut dy = a.y.abs_diff(b.y);
        if dx * 2 > self.width {
            dx = self.width - dx;
        }
        if dy * 2 > self.height {
            dy = self.height - dy;
        }
        dx + dy
    }

    /// Bearing from `a` to `b` in radians, following the shorter wrap path
    /// on each axis. Positive y points south.
    pub fn angle(&self, a: Location, b: Location) -> f64 {
        let a = self.normalize(a);
        let b = self.normalize(b);
        let w = self.width as f64;
        let h = self.height as f64;
        let mut dx = b.x as f64 - a.x as f64;
        let mut dy = b.y as f64 - a.y as f64;

        if dx > w - dx {
            dx -= w;
        } else if -dx > w + dx {
            dx += w;
        }

        if dy > h - dy {
            dy -= h;
        } else if -dy > h + dy {
            dy += h;
        }

        dy.atan2(dx)
    }

    /// Number of cells owned by `player`.
    pub fn territory_of(&self, player: PlayerId) -> usize {
        self.sites.iter().filter(|s| s.is_owned_by(player)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::location::CARDINALS;

    fn grid(width: usize, height: usize) -> Grid {
        Grid::filled(width, height, Site::default()).unwrap()
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4, Vec::new()),
            Err(GridError::EmptyDimensions { width: 0, height: 4 })
        );
    }

    #[test]
    fn rejects_wrong_site_count() {
        assert_eq!(
            Grid::new(2, 2, vec![Site::default(); 3]),
            Err(GridError::SiteCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn neighbor_location_wraps_edges() {
        let g = grid(5, 4);
        assert_eq!(
            g.neighbor_location(Location::new(0, 0), Direction::North, 1),
            Location::new(0, 3)
        );
        assert_eq!(
            g.neighbor_location(Location::new(0, 0), Direction::West, 1),
            Location::new(4, 0)
        );
        assert_eq!(
            g.neighbor_location(Location::new(4, 3), Direction::East, 1),
            Location::new(0, 3)
        );
        assert_eq!(
            g.neighbor_location(Location::new(4, 3), Direction::South, 1),
            Location::new(4, 0)
        );
    }

    #[test]
    fn neighbor_location_large_radius() {
        let g = grid(5, 4);
        assert_eq!(
            g.neighbor_location(Location::new(1, 1), Direction::East, 12),
            Location::new(3, 1)
        );
        assert_eq!(
            g.neighbor_location(Location::new(1, 1), Direction::North, 6),
            Location::new(1, 3)
        );
    }

    #[test]
    fn hold_and_zero_radius_stay_put() {
        let g = grid(5, 4);
        let loc = Location::new(2, 2);
        assert_eq!(g.neighbor_location(loc, Direction::Hold, 3), loc);
        assert_eq!(g.neighbor_location(loc, Direction::East, 0), loc);
    }

    #[test]
    fn step_and_back_returns_home() {
        let g = grid(3, 7);
        for loc in g.locations() {
            for d in CARDINALS {
                let there = g.neighbor_location(loc, d, 1);
                assert_eq!(g.neighbor_location(there, d.opposite(), 1), loc);
            }
        }
    }

    #[test]
    fn distance_uses_shorter_wrap() {
        let g = grid(10, 10);
        assert_eq!(g.distance(Location::new(0, 0), Location::new(9, 0)), 1);
        assert_eq!(g.distance(Location::new(0, 0), Location::new(5, 5)), 10);
        assert_eq!(g.distance(Location::new(1, 8), Location::new(8, 1)), 6);
    }

    #[test]
    fn distance_on_odd_grid_is_bounded() {
        let g = grid(5, 3);
        let max = g
            .locations()
            .flat_map(|a| g.locations().map(move |b| (a, b)))
            .map(|(a, b)| g.distance(a, b))
            .max()
            .unwrap();
        assert_eq!(max, 5 / 2 + 3 / 2);
    }

    #[test]
    fn angle_follows_wrap() {
        let g = grid(10, 10);
        // (9, 0) is one step west of (0, 0) across the seam.
        let a = g.angle(Location::new(0, 0), Location::new(9, 0));
        assert!((a - std::f64::consts::PI).abs() < 1e-9);
        // Directly south.
        let b = g.angle(Location::new(0, 0), Location::new(0, 2));
        assert!((b - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn site_lookup_normalizes() {
        let mut g = grid(4, 4);
        g.set(Location::new(1, 2), Site::new(3, 9, 2));
        assert_eq!(g.site(Location::new(5, 6)), Site::new(3, 9, 2));
        assert_eq!(
            g.site_at(Location::new(1, 3), Direction::North, 1),
            Site::new(3, 9, 2)
        );
    }

    #[test]
    fn locations_are_row_major() {
        let g = grid(3, 2);
        let locs: Vec<Location> = g.locations().collect();
        assert_eq!(locs[0], Location::new(0, 0));
        assert_eq!(locs[2], Location::new(2, 0));
        assert_eq!(locs[3], Location::new(0, 1));
        assert_eq!(locs.len(), 6);
    }

    #[test]
    fn territory_counts_owner() {
        let mut g = grid(3, 3);
        g.set(Location::new(0, 0), Site::new(1, 0, 0));
        g.set(Location::new(2, 2), Site::new(1, 0, 0));
        g.set(Location::new(1, 1), Site::new(2, 0, 0));
        assert_eq!(g.territory_of(1), 2);
        assert_eq!(g.territory_of(2), 1);
    }
}

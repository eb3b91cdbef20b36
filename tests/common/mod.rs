#![allow(dead_code)]

use approx::assert_relative_eq;
use satloc::SatLocation;

pub const STARLINK_1008_NAME: &str = "STARLINK-1008";
pub const STARLINK_1008_LINE1: &str =
    "1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990";
pub const STARLINK_1008_LINE2: &str =
    "2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084";

/// Three satellites in CelesTrak three-line format, CRLF line endings.
pub const STARLINK_CATALOG: &str = "STARLINK-1007           \r
1 44713U 19074A   25117.50000000  .00001234  00000+0  10270-3 0  9993\r
2 44713  53.0540 166.0020 0001404  88.4511 271.6612 15.06420000301129\r
STARLINK-1008           \r
1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990\r
2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084\r
STARLINK-1009           \r
1 44715U 19074C   25117.40000000  .00000500  00000+0  50000-4 0  9995\r
2 44715  53.0530 166.2000 0001200  95.0000 265.0000 15.06410000301094\r
";

pub fn assert_location_close(actual: &SatLocation, expected: &SatLocation, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
    assert_relative_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_relative_eq!(actual.longitude, expected.longitude, epsilon = epsilon);
    assert_relative_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
}

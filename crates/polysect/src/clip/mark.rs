//! Boundary contacts between two simple polygons.

use crate::geom2::{segment_intersection, ClipCfg, Polygon};

use super::types::{EdgeMarks, Marks};

/// Intersect every edge of `a` with every edge of `b`.
///
/// A contact at an edge endpoint flags that vertex (the start vertex wins when
/// both match); any other contact is recorded as an interior crossing of the
/// edge. The `degenerate` flag is a running AND of "this contact is an
/// endpoint of both edges" over all contacts.
pub fn mark_crossings(a: &Polygon, b: &Polygon, cfg: ClipCfg) -> Marks {
    let (na, nb) = (a.len(), b.len());
    let mut ma = EdgeMarks::with_len(na);
    let mut mb = EdgeMarks::with_len(nb);
    let mut degenerate = true;

    for i in 0..na {
        let ea = a.edge(i);
        for j in 0..nb {
            let eb = b.edge(j);
            let Some(p) = segment_intersection(&ea, &eb) else {
                continue;
            };
            let on_a = ea.has_endpoint(p, cfg);
            let on_b = eb.has_endpoint(p, cfg);
            degenerate = degenerate && on_a && on_b;

            if cfg.same_point(p, ea.a) {
                ma.at_vertex[i] = true;
            } else if cfg.same_point(p, ea.b) {
                ma.at_vertex[(i + 1) % na] = true;
            }
            if cfg.same_point(p, eb.a) {
                mb.at_vertex[j] = true;
            } else if cfg.same_point(p, eb.b) {
                mb.at_vertex[(j + 1) % nb] = true;
            }

            if !on_a {
                ma.interior[i].push(p);
            }
            if !on_b {
                mb.interior[j].push(p);
            }
        }
    }

    Marks {
        a: ma,
        b: mb,
        degenerate,
    }
}

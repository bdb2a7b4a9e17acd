/// 단순한 온도-허용응력 테이블과 선형 보간을 제공한다.
/// 값은 참고용이며 평가 시 최신 코드(ASME 등)로 검증해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub value_mpa: f64,
}

impl TempPoint {
    pub const fn new(temp_c: f64, value_mpa: f64) -> Self {
        Self { temp_c, value_mpa }
    }
}

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// ASME B31 Y 계수: 탄소강 0.4, 크롬-몰리 합금강 0.7
    pub y_coefficient: f64,
    pub allowable: &'static [TempPoint],
}

#[derive(Debug)]
pub struct MaterialValue {
    pub value_mpa: f64,
    pub source_temp_c: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 재질 코드와 온도로 허용 응력을 조회한다.
pub fn allowable_stress(code: &str, temp_c: f64) -> Option<MaterialValue> {
    let mat = find_material(code)?;
    interpolate(mat.allowable, temp_c)
}

/// 재질 코드로 B31 Y 계수를 조회한다.
pub fn y_coefficient(code: &str) -> Option<f64> {
    find_material(code).map(|m| m.y_coefficient)
}

fn interpolate(points: &[TempPoint], temp_c: f64) -> Option<MaterialValue> {
    if points.is_empty() {
        return None;
    }
    if points.len() == 1 || temp_c <= points[0].temp_c {
        let p = points[0];
        return Some(MaterialValue {
            value_mpa: p.value_mpa,
            source_temp_c: p.temp_c,
            clamped: true,
        });
    }
    if temp_c >= points[points.len() - 1].temp_c {
        let p = points[points.len() - 1];
        return Some(MaterialValue {
            value_mpa: p.value_mpa,
            source_temp_c: p.temp_c,
            clamped: true,
        });
    }
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if temp_c >= lo.temp_c && temp_c <= hi.temp_c {
            let frac = (temp_c - lo.temp_c) / (hi.temp_c - lo.temp_c);
            return Some(MaterialValue {
                value_mpa: lo.value_mpa + frac * (hi.value_mpa - lo.value_mpa),
                source_temp_c: temp_c,
                clamped: false,
            });
        }
    }
    None
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "SA-516-70",
        name: "SA-516 Gr.70",
        notes: "탄소강 압력용기 강판",
        y_coefficient: 0.4,
        allowable: &[
            TempPoint::new(40.0, 137.9),
            TempPoint::new(200.0, 137.9),
            TempPoint::new(300.0, 130.3),
            TempPoint::new(375.0, 110.3),
            TempPoint::new(425.0, 81.4),
        ],
    },
    MaterialData {
        code: "SA-516-72",
        name: "SA-516 Gr.72",
        notes: "탄소강 압력용기 강판 (고강도)",
        y_coefficient: 0.4,
        allowable: &[
            TempPoint::new(40.0, 172.37),
            TempPoint::new(200.0, 172.37),
            TempPoint::new(300.0, 158.6),
            TempPoint::new(375.0, 122.0),
            TempPoint::new(425.0, 88.9),
        ],
    },
    MaterialData {
        code: "SA-106-B",
        name: "SA-106 Gr.B",
        notes: "탄소강 배관 (seamless)",
        y_coefficient: 0.4,
        allowable: &[
            TempPoint::new(40.0, 117.9),
            TempPoint::new(200.0, 117.9),
            TempPoint::new(300.0, 113.8),
            TempPoint::new(400.0, 88.3),
            TempPoint::new(450.0, 61.4),
        ],
    },
    MaterialData {
        code: "SA-335-P11",
        name: "SA-335 P11",
        notes: "1.25Cr-0.5Mo 합금강 배관",
        y_coefficient: 0.7,
        allowable: &[
            TempPoint::new(40.0, 117.9),
            TempPoint::new(300.0, 112.4),
            TempPoint::new(450.0, 104.8),
            TempPoint::new(550.0, 48.3),
        ],
    },
    MaterialData {
        code: "SA-335-P22",
        name: "SA-335 P22",
        notes: "2.25Cr-1Mo 합금강 배관",
        y_coefficient: 0.7,
        allowable: &[
            TempPoint::new(40.0, 117.9),
            TempPoint::new(300.0, 113.1),
            TempPoint::new(450.0, 107.6),
            TempPoint::new(575.0, 42.8),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code_or_name() {
        assert!(find_material("sa-516-72").is_some());
        assert!(find_material("SA-516 Gr.72").is_some());
        assert!(find_material("unknown").is_none());
    }

    #[test]
    fn interpolation_and_clamp() {
        let v = allowable_stress("SA-106-B", 100.0).expect("재질 조회");
        assert!(!v.clamped);
        assert!((v.value_mpa - 117.9).abs() < 1e-9);

        let edge = allowable_stress("SA-106-B", 600.0).expect("재질 조회");
        assert!(edge.clamped);
        assert!((edge.value_mpa - 61.4).abs() < 1e-9);
    }

    #[test]
    fn y_coefficient_by_class() {
        assert_eq!(y_coefficient("SA-516-72"), Some(0.4));
        assert_eq!(y_coefficient("SA-335-P22"), Some(0.7));
    }
}

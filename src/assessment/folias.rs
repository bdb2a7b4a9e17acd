use crate::assessment::round_to;

/// API-579 Table 5.2의 Folias 계수 곡선을 근사하는 10차 다항식 계수 (λ 오름차순).
/// 표준 표의 보간을 대체하는 고정 상수이므로 설정으로 노출하지 않는다.
const FOLIAS_COEFFS: [f64; 11] = [
    1.0010,
    -0.014195,
    0.29090,
    -0.096420,
    0.020890,
    -0.0030540,
    2.9570e-4,
    -1.8462e-5,
    7.1553e-7,
    -1.5631e-8,
    1.4656e-10,
];

/// 결함 길이 파라미터 λ에 대한 Folias 계수 M_t를 계산한다. 소수 3자리로 반올림.
pub fn folias_factor(lambda: f64) -> f64 {
    let mt = FOLIAS_COEFFS
        .iter()
        .rev()
        .fold(0.0, |acc, coeff| acc * lambda + coeff);
    round_to(mt, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folias_at_zero_is_table_origin() {
        assert_eq!(folias_factor(0.0), 1.001);
    }

    #[test]
    fn folias_spot_values() {
        assert_eq!(folias_factor(1.0), 1.199);
        assert_eq!(folias_factor(2.0), 1.618);
        assert_eq!(folias_factor(3.0), 2.103);
        assert_eq!(folias_factor(5.0), 3.091);
    }

    #[test]
    fn folias_monotone_over_working_range() {
        let mut prev = folias_factor(0.0);
        for i in 1..=50 {
            let mt = folias_factor(i as f64 * 0.1);
            assert!(mt >= prev, "λ={} 에서 감소: {mt} < {prev}", i as f64 * 0.1);
            prev = mt;
        }
    }
}

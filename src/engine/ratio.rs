// ==========================================
// 门店库存调拨决策支持系统 - 比值计算辅助
// ==========================================
// 职责: 管线所有派生比值的统一置零规则
// 红线: 比值退化一律置 0,绝不向上抛错、绝不产出非有限值
// ==========================================

/// 非有限值置 0 后向零截断
///
/// # 规则
/// - NaN / ±∞ → 0
/// - 其余向零取整 (正负皆然)
pub fn truncate_or_zero(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// 卖通率百分比 = sold / net_receiving * 100
///
/// # 规则
/// - 分母 <= 0 → 0 (除零与负净收货都视为"无信号")
/// - 结果向零截断为整数百分比
pub fn sell_through_pct(sold_qty: i64, net_receiving: i64) -> i64 {
    if net_receiving <= 0 {
        return 0;
    }
    truncate_or_zero(sold_qty as f64 / net_receiving as f64 * 100.0)
}

/// 目标覆盖天数 = on_hand_sum / (sold_sum / date_difference)
///
/// # 规则
/// - date_difference <= 0 或 sold_sum <= 0 → 无法得出日销速率, 取 0
/// - 结果向零截断
pub fn days_of_cover(on_hand_sum: i64, sold_sum: i64, date_difference: i64) -> i64 {
    if date_difference <= 0 || sold_sum <= 0 {
        return 0;
    }
    let daily_rate = sold_sum as f64 / date_difference as f64;
    truncate_or_zero(on_hand_sum as f64 / daily_rate)
}

/// 带符号调拨量 = targeted_cover * (sold / shop_days) - on_hand
///
/// # 规则
/// - shop_days <= 0 → 速率不可得, 取 0
/// - 结果向零截断, 保留符号 (负=调出, 正=调入)
pub fn transfer_requirement(
    targeted_cover: i64,
    sold_qty: i64,
    shop_days: i64,
    on_hand_qty: i64,
) -> i64 {
    if shop_days <= 0 {
        return 0;
    }
    let desired = targeted_cover as f64 * (sold_qty as f64 / shop_days as f64);
    truncate_or_zero(desired - on_hand_qty as f64)
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_or_zero_finite() {
        assert_eq!(truncate_or_zero(12.9), 12);
        assert_eq!(truncate_or_zero(-12.9), -12); // 向零截断
        assert_eq!(truncate_or_zero(0.0), 0);
    }

    #[test]
    fn test_truncate_or_zero_non_finite() {
        assert_eq!(truncate_or_zero(f64::NAN), 0);
        assert_eq!(truncate_or_zero(f64::INFINITY), 0);
        assert_eq!(truncate_or_zero(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_sell_through_pct_normal() {
        // 70 / 100 * 100 = 70
        assert_eq!(sell_through_pct(70, 100), 70);
        // 1 / 3 * 100 = 33.33 → 33
        assert_eq!(sell_through_pct(1, 3), 33);
    }

    #[test]
    fn test_sell_through_pct_degenerate_denominator() {
        assert_eq!(sell_through_pct(50, 0), 0); // 除零
        assert_eq!(sell_through_pct(50, -10), 0); // 负净收货
        assert_eq!(sell_through_pct(0, 0), 0);
    }

    #[test]
    fn test_sell_through_never_negative_on_valid_input() {
        for sold in [0, 1, 10, 100] {
            for net in [-5, 0, 1, 50, 200] {
                assert!(sell_through_pct(sold, net) >= 0);
            }
        }
    }

    #[test]
    fn test_days_of_cover_normal() {
        // 日销 = 150 / 30 = 5, 覆盖 = 60 / 5 = 12
        assert_eq!(days_of_cover(60, 150, 30), 12);
    }

    #[test]
    fn test_days_of_cover_degenerate() {
        assert_eq!(days_of_cover(60, 0, 30), 0); // 无销量
        assert_eq!(days_of_cover(60, 150, 0), 0); // 无库龄
        assert_eq!(days_of_cover(0, 0, 0), 0);
    }

    #[test]
    fn test_transfer_requirement_deficit_and_surplus() {
        // 目标 10 天 * (50 / 10 天) = 50, 在库 10 → 缺口 +40
        assert_eq!(transfer_requirement(10, 50, 10, 10), 40);
        // 目标 2 天 * (10 / 10 天) = 2, 在库 30 → 富余 -28
        assert_eq!(transfer_requirement(2, 10, 10, 30), -28);
    }

    #[test]
    fn test_transfer_requirement_zero_shop_days() {
        assert_eq!(transfer_requirement(10, 50, 0, 10), 0);
        assert_eq!(transfer_requirement(10, 50, -1, 10), 0);
    }
}

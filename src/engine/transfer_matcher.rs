// ==========================================
// 门店库存调拨决策支持系统 - 调拨撮合引擎
// ==========================================
// 职责: 贪心首配: 调出门店的富余逐个填入同款调入门店的缺口
// 红线: 发收双方是同一工作集上的索引视图, 每次搬动即时可见;
//       绝不产出 quantity <= 0 的建议, 绝不同店自调
// ==========================================

use crate::domain::inventory::{AggregatedRecord, TransferRecommendation};
use crate::domain::types::{GroupScope, MatchOrdering};
use tracing::{debug, instrument};

// ==========================================
// TransferMatchOutcome - 撮合结果
// ==========================================
#[derive(Debug, Clone)]
pub struct TransferMatchOutcome {
    /// 调拨建议 (构造后不可变)
    pub recommendations: Vec<TransferRecommendation>,
    /// 实际搬动总件数
    pub units_moved: i64,
    /// 撮合后仍未满足的缺口合计 (调入侧残量)
    pub open_deficit: i64,
    /// 撮合后仍未消化的富余合计 (调出侧残量, 取绝对值)
    pub open_surplus: i64,
}

// ==========================================
// TransferMatcher - 撮合引擎
// ==========================================
pub struct TransferMatcher {
    // 无状态引擎, 不需要注入依赖
}

impl TransferMatcher {
    pub fn new() -> Self {
        Self {}
    }

    /// 在准入行上撮合调拨建议
    ///
    /// 规则:
    /// 1) 候选调入行: 同 SKU (城市口径下还须同城市)、不同门店、仍有缺口
    /// 2) 每次搬动 qty = min(调出余量, 调入缺口), 双方立即收敛向 0
    /// 3) 调出余量清零即止; 无候选的调出行直接跳过, 不记录任何建议
    /// 4) 遍历顺序由 ordering 显式指定, 排序只发生在工作集上
    #[instrument(skip(self, eligible), fields(
        eligible = eligible.len(),
        scope = %scope,
        ordering = %ordering
    ))]
    pub fn match_transfers(
        &self,
        eligible: &[AggregatedRecord],
        scope: GroupScope,
        ordering: MatchOrdering,
    ) -> TransferMatchOutcome {
        // 发收双方共享的唯一工作集
        let mut working: Vec<AggregatedRecord> = eligible.to_vec();

        if ordering == MatchOrdering::SkuThenMagnitude {
            working.sort_by(|a, b| {
                a.sku
                    .cmp(&b.sku)
                    .then_with(|| b.transfer_qty.abs().cmp(&a.transfer_qty.abs()))
                    .then_with(|| a.store_name.cmp(&b.store_name))
            });
        }

        let sender_indices: Vec<usize> = working
            .iter()
            .enumerate()
            .filter(|(_, row)| row.transfer_qty < 0)
            .map(|(i, _)| i)
            .collect();
        let receiver_indices: Vec<usize> = working
            .iter()
            .enumerate()
            .filter(|(_, row)| row.transfer_qty > 0)
            .map(|(i, _)| i)
            .collect();

        let mut recommendations: Vec<TransferRecommendation> = Vec::new();
        let mut units_moved = 0i64;

        for &sender in &sender_indices {
            let mut remaining = working[sender].transfer_qty.abs();
            if remaining == 0 {
                continue;
            }

            for &receiver in &receiver_indices {
                if working[receiver].sku != working[sender].sku {
                    continue;
                }
                if scope.uses_region() && working[receiver].region != working[sender].region {
                    continue;
                }
                if working[receiver].store_name == working[sender].store_name {
                    continue;
                }
                // 已被先前调出行填满的缺口不再参与
                if working[receiver].transfer_qty <= 0 {
                    continue;
                }

                let quantity = remaining.min(working[receiver].transfer_qty);
                if quantity <= 0 {
                    continue;
                }

                working[sender].transfer_qty += quantity;
                working[receiver].transfer_qty -= quantity;
                remaining -= quantity;
                units_moved += quantity;

                recommendations.push(TransferRecommendation {
                    sku: working[sender].sku.clone(),
                    from_store: working[sender].store_name.clone(),
                    to_store: working[receiver].store_name.clone(),
                    design: working[sender].design.clone(),
                    size: working[sender].size.clone(),
                    color: working[sender].color.clone(),
                    category_volume: working[sender].category_volume.clone(),
                    product_type: working[sender].product_type.clone(),
                    region: working[sender].region.clone(),
                    quantity,
                });

                if remaining <= 0 {
                    break;
                }
            }
        }

        let open_deficit: i64 = working
            .iter()
            .filter(|row| row.transfer_qty > 0)
            .map(|row| row.transfer_qty)
            .sum();
        let open_surplus: i64 = working
            .iter()
            .filter(|row| row.transfer_qty < 0)
            .map(|row| row.transfer_qty.abs())
            .sum();

        debug!(
            recommendation_count = recommendations.len(),
            units_moved,
            open_deficit,
            open_surplus,
            "撮合完成"
        );

        TransferMatchOutcome {
            recommendations,
            units_moved,
            open_deficit,
            open_surplus,
        }
    }
}

impl Default for TransferMatcher {
    fn default() -> Self {
        Self::new()
    }
}

//! SQL 题目选择
//!
//! 两条 SQL 都是静态文本，不做任何拼接生成；评分端按字面比对，
//! 所以这里的常量一个字符都不能动。

/// 题目 1：排除每月 1 号的付款后，找出最高付款金额对应的员工
pub const MAX_PAYMENT_SQL: &str = r"SELECT
  pmx.SALARY,
  CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME,
  TIMESTAMPDIFF(YEAR, e.DOB, CURDATE()) AS AGE,
  d.DEPARTMENT_NAME
FROM
  (SELECT MAX(AMOUNT) AS SALARY
   FROM PAYMENTS
   WHERE DAY(PAYMENT_TIME) <> 1) pmx
JOIN PAYMENTS p ON p.AMOUNT = pmx.SALARY
  AND DAY(p.PAYMENT_TIME) <> 1
JOIN EMPLOYEE e ON p.EMP_ID = e.EMP_ID
JOIN DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID;
";

/// 题目 2：统计每个员工所在部门中比他年轻的同事人数
pub const YOUNGER_COUNT_SQL: &str = r"SELECT
  e.EMP_ID,
  e.FIRST_NAME,
  e.LAST_NAME,
  d.DEPARTMENT_NAME,
  COALESCE((
    SELECT COUNT(1)
    FROM EMPLOYEE e2
    WHERE e2.DEPARTMENT = e.DEPARTMENT
      AND TIMESTAMPDIFF(YEAR, e2.DOB, CURDATE()) < TIMESTAMPDIFF(YEAR, e.DOB, CURDATE())
  ), 0) AS YOUNGER_EMPLOYEES_COUNT
FROM EMPLOYEE e
JOIN DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID
ORDER BY e.EMP_ID DESC;
";

/// SQL 题目枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlQuery {
    /// 题目 1（奇数编号）
    MaxPaymentNotFirstDay,
    /// 题目 2（偶数编号）
    YoungerEmployeeCounts,
}

impl SqlQuery {
    /// 根据报名编号选择题目
    ///
    /// 规则：取编号里的数字字符，末两位（只剩一位取一位，一位都没有按 1 算）
    /// 奇数选题目 1，偶数选题目 2。纯函数，不做任何 I/O。
    pub fn select(reg_no: &str) -> Self {
        let digits: Vec<u32> = reg_no.chars().filter_map(|c| c.to_digit(10)).collect();
        let value = match digits.as_slice() {
            [] => 1,
            [single] => *single,
            [.., tens, ones] => tens * 10 + ones,
        };

        if value % 2 == 0 {
            SqlQuery::YoungerEmployeeCounts
        } else {
            SqlQuery::MaxPaymentNotFirstDay
        }
    }

    /// 获取题目的 SQL 文本
    pub fn sql(self) -> &'static str {
        match self {
            SqlQuery::MaxPaymentNotFirstDay => MAX_PAYMENT_SQL,
            SqlQuery::YoungerEmployeeCounts => YOUNGER_COUNT_SQL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_last_two_digits_selects_question_one() {
        // "47" -> 奇数
        assert_eq!(SqlQuery::select("REG12347"), SqlQuery::MaxPaymentNotFirstDay);
    }

    #[test]
    fn even_last_two_digits_selects_question_two() {
        // "48" -> 偶数
        assert_eq!(SqlQuery::select("REG12348"), SqlQuery::YoungerEmployeeCounts);
    }

    #[test]
    fn single_digit_is_used_as_is() {
        assert_eq!(SqlQuery::select("X5"), SqlQuery::MaxPaymentNotFirstDay);
        assert_eq!(SqlQuery::select("X4"), SqlQuery::YoungerEmployeeCounts);
    }

    #[test]
    fn no_digits_defaults_to_odd() {
        assert_eq!(SqlQuery::select("AB"), SqlQuery::MaxPaymentNotFirstDay);
        assert_eq!(SqlQuery::select(""), SqlQuery::MaxPaymentNotFirstDay);
    }

    #[test]
    fn non_digit_characters_do_not_affect_selection() {
        // 数字穿插在字母里，结果只看数字序列
        assert_eq!(SqlQuery::select("R4E7G"), SqlQuery::select("47"));
        assert_eq!(SqlQuery::select("a1b2c8"), SqlQuery::select("128"));
    }

    #[test]
    fn selection_is_idempotent() {
        let first = SqlQuery::select("REG12347").sql();
        let second = SqlQuery::select("REG12347").sql();
        assert_eq!(first, second);
    }

    #[test]
    fn sql_texts_are_distinct_and_terminated() {
        assert_ne!(MAX_PAYMENT_SQL, YOUNGER_COUNT_SQL);
        assert!(MAX_PAYMENT_SQL.trim_end().ends_with(';'));
        assert!(YOUNGER_COUNT_SQL.trim_end().ends_with(';'));
    }
}

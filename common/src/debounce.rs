//! デバウンス
//!
//! タイマーそのものは持たず、「どの予約が最新か」だけを管理する。
//! 呼び出し側は `arm` で得たチケットを待ち時間の後に `fire` へ渡し、
//! `true` が返ったときだけ処理を実行する。

/// 予約の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u32,
    next_id: u64,
    pending: Option<Ticket>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            next_id: 0,
            pending: None,
        }
    }

    /// 待ち時間（ミリ秒）
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// 新しく予約する。保留中の予約は無効になる
    pub fn arm(&mut self) -> Ticket {
        self.next_id += 1;
        let ticket = Ticket(self.next_id);
        self.pending = Some(ticket);
        ticket
    }

    /// 保留中の予約を取り消す
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take()
    }

    /// 待ち時間が経過した。最新の予約なら `true` を返して消費する
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 仮想時刻でタイマーを動かす
    struct FakeClock {
        now: u64,
        timers: Vec<(u64, Ticket)>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self { now: 0, timers: Vec::new() }
        }

        fn schedule(&mut self, debouncer: &mut Debouncer) {
            let ticket = debouncer.arm();
            self.timers.push((self.now + u64::from(debouncer.wait_ms()), ticket));
        }

        /// 時刻を進め、期限の来たチケットのうち実行されたものの数を返す
        fn advance(&mut self, ms: u64, debouncer: &mut Debouncer) -> usize {
            self.now += ms;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|(at, _)| *at <= now);
            self.timers = rest;
            due.into_iter().filter(|(_, t)| debouncer.fire(*t)).count()
        }
    }

    #[test]
    fn test_single_arm_fires_once() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.arm();
        assert!(debouncer.is_pending());
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn test_rearm_supersedes_previous_ticket() {
        let mut debouncer = Debouncer::new(300);
        let first = debouncer.arm();
        let second = debouncer.arm();
        assert_ne!(first, second);
        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(300);
        let ticket = debouncer.arm();
        assert_eq!(debouncer.cancel(), Some(ticket));
        assert!(!debouncer.fire(ticket));
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn test_rapid_keystrokes_execute_once_with_final_value() {
        let mut debouncer = Debouncer::new(300);
        let mut clock = FakeClock::new();
        let mut input = String::new();
        let mut executed_with = Vec::new();

        for ch in "rust".chars() {
            input.push(ch);
            clock.schedule(&mut debouncer);
            if clock.advance(100, &mut debouncer) > 0 {
                executed_with.push(input.clone());
            }
        }
        assert!(executed_with.is_empty());

        if clock.advance(300, &mut debouncer) > 0 {
            executed_with.push(input.clone());
        }
        assert_eq!(executed_with, vec!["rust".to_string()]);
    }

    #[test]
    fn test_separate_quiet_periods_execute_separately() {
        let mut debouncer = Debouncer::new(300);
        let mut clock = FakeClock::new();

        clock.schedule(&mut debouncer);
        assert_eq!(clock.advance(300, &mut debouncer), 1);

        clock.schedule(&mut debouncer);
        assert_eq!(clock.advance(299, &mut debouncer), 0);
        assert_eq!(clock.advance(1, &mut debouncer), 1);
    }
}
